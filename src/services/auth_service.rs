//! Token issuance and validation for the protected API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to.
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

pub trait AuthService: Send + Sync {
    /// Issues a signed token for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an empty username.
    fn login(&self, username: &str) -> Result<String, AuthError>;

    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}
