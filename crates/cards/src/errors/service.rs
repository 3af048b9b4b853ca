use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Card already registered with given mobileNumber {0}")]
    AlreadyExists(String),

    #[error("{entity} not found with the given input data {field}: '{value}'")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        ServiceError::NotFound {
            entity,
            field,
            value: value.into(),
        }
    }
}
