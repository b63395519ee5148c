use models::errors::ModelError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the user and station services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self { Self::Validation(err.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NotFound => Self::NotFound("record not found".into()),
            ModelError::DuplicateKey(_) => Self::Conflict("record already exists".into()),
            ModelError::ConstraintViolation(msg) | ModelError::OutOfRange(msg) => Self::Validation(msg),
            ModelError::Db(msg) => Self::Internal(msg),
        }
    }
}
