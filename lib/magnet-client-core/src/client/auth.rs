use std::fmt;
use std::sync::Arc;

use http::HeaderValue;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::ApiClientError;

/// A token or password, zeroed on drop and masked when printed.
///
/// `Display` keeps the first and last four characters of long values,
/// `Debug` shows nothing.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecureString(String);

impl SecureString {
    /// Wraps a secret.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// The secret in clear.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares with a clear value.
    pub fn equals_str(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureString(***)")
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.0.chars().count();
        if count <= 8 {
            return f.write_str("***");
        }
        let head = self.0.chars().take(4).collect::<String>();
        let tail = self.0.chars().skip(count - 4).collect::<String>();
        write!(f, "{head}...{tail}")
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// The security scheme and scopes an operation declares.
///
/// Both are descriptive: they are handed to a [`AccessToken::Dynamic`]
/// resolver and never enforced by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecurityRequirement {
    /// The security scheme name, e.g. `OAuth2PasswordBearer`.
    pub scheme: &'static str,
    /// The required scopes.
    pub scopes: &'static [&'static str],
}

impl SecurityRequirement {
    /// Creates a requirement for `scheme` with `scopes`.
    pub const fn new(scheme: &'static str, scopes: &'static [&'static str]) -> Self {
        Self { scheme, scopes }
    }
}

/// A function computing a token for a security scheme and its scopes.
pub type TokenResolver = Arc<dyn Fn(&str, &[&str]) -> String + Send + Sync>;

/// Where the `Authorization` header value comes from.
///
/// The token is resolved on every call and never cached, so a
/// [`AccessToken::Dynamic`] resolver can rotate tokens.
///
/// # Examples
///
/// ```rust
/// use magnet_client_core::{AccessToken, SecurityRequirement};
///
/// const ME: SecurityRequirement = SecurityRequirement::new("OAuth2PasswordBearer", &["me"]);
///
/// let token = AccessToken::from("tok123");
/// assert!(token.resolve(&ME).equals_str("tok123"));
///
/// let token = AccessToken::dynamic(|scheme, scopes| format!("{scheme}:{}", scopes.join(",")));
/// assert!(token.resolve(&ME).equals_str("OAuth2PasswordBearer:me"));
/// ```
#[derive(Clone)]
pub enum AccessToken {
    /// A token sent verbatim.
    Static(SecureString),

    /// A resolver called with the scheme and scopes of each secured call.
    Dynamic(TokenResolver),
}

impl AccessToken {
    /// Creates a dynamic token from a resolver function.
    pub fn dynamic<F>(resolver: F) -> Self
    where
        F: Fn(&str, &[&str]) -> String + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(resolver))
    }

    /// Resolves the token for a secured call.
    pub fn resolve(&self, requirement: &SecurityRequirement) -> SecureString {
        match self {
            Self::Static(token) => token.clone(),
            Self::Dynamic(resolver) => {
                SecureString::new(resolver(requirement.scheme, requirement.scopes))
            }
        }
    }

    /// Builds the sensitive `Authorization` header value.
    ///
    /// # Errors
    ///
    /// Fails if the token contains characters not allowed in a header.
    pub fn to_header_value(
        &self,
        requirement: &SecurityRequirement,
    ) -> Result<HeaderValue, ApiClientError> {
        let token = self.resolve(requirement);
        let mut value = HeaderValue::from_str(token.as_str())?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(token) => f.debug_tuple("Static").field(token).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<resolver>").finish(),
        }
    }
}

impl From<SecureString> for AccessToken {
    fn from(value: SecureString) -> Self {
        Self::Static(value)
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self::Static(value.into())
    }
}

impl From<&str> for AccessToken {
    fn from(value: &str) -> Self {
        Self::Static(value.into())
    }
}
