use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("reservation already exists for this email")]
    Conflict,
    #[error("no reservation for this email")]
    NotFound,
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::UniqueViolation(_) => ServiceError::Conflict,
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
