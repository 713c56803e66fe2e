use serde::{Deserialize, Serialize};

/// The credential returned by a successful login.
#[derive(derive_more::Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The opaque access token, sent verbatim in the `Authorization` header.
    #[debug("{}***", access_token.get(..4).unwrap_or_default())]
    pub access_token: String,
    /// The token type, usually `bearer`.
    pub token_type: String,
}

/// The `application/x-www-form-urlencoded` body of `login_user`.
///
/// Only `username` and `password` are required; the other fields follow the
/// OAuth2 password flow and are omitted when `None`.
#[derive(derive_more::Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    /// Login name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password, never logged.
    #[debug(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// OAuth2 grant type, `password` when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
    /// Space separated scopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// OAuth2 client identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// OAuth2 client secret, never logged.
    #[debug(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
}

impl LoginForm {
    /// Creates a form with the two required fields.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            ..Self::default()
        }
    }

    /// Sets the scopes.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }
}
