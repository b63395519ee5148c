use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    ExpiredToken,
    /// The detail is for logs only; clients see the generic message.
    #[error("internal server error")]
    Internal(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::UserAlreadyExists => 1002,
            AuthError::InvalidCredentials => 1004,
            AuthError::InvalidToken => 1005,
            AuthError::ExpiredToken => 1006,
            AuthError::Internal(_) => 1200,
        }
    }
}
