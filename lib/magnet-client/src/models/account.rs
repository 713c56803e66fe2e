use serde::{Deserialize, Serialize};

/// A new password for the current user.
#[derive(derive_more::Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyPassword {
    /// The new password.
    #[debug(skip)]
    pub password: String,
}

/// Credentials of the first administrator.
#[derive(derive_more::Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterFirstAdmin {
    /// Contact email.
    pub email: String,
    /// Password.
    #[debug(skip)]
    pub password: String,
}

/// Credentials of a new user.
#[derive(derive_more::Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    /// Contact email.
    pub email: String,
    /// Password.
    #[debug(skip)]
    pub password: String,
}
