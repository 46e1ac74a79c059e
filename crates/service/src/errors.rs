use thiserror::Error;

/// Errors surfaced by the user and entry services.
///
/// `BusinessRule` and `Authentication` carry a message meant for the end
/// user. `ContractViolation` marks a caller bug (e.g. updating an entry that
/// was never persisted) and must not be shown as a friendly message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    BusinessRule(String),
    #[error("{0}")]
    Authentication(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("contract violation: {0}")]
    ContractViolation(String),
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl ServiceError {
    pub fn business(msg: impl Into<String>) -> Self { Self::BusinessRule(msg.into()) }

    pub fn authentication(msg: impl Into<String>) -> Self { Self::Authentication(msg.into()) }

    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn contract(msg: impl Into<String>) -> Self { Self::ContractViolation(msg.into()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::BusinessRule(_) => 1001,
            ServiceError::Authentication(_) => 1004,
            ServiceError::NotFound(_) => 1003,
            ServiceError::ContractViolation(_) => 1500,
            ServiceError::Hash(_) => 1101,
            ServiceError::Repository(_) => 1200,
        }
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => ServiceError::BusinessRule(msg),
            models::errors::ModelError::Conflict(what) => ServiceError::Repository(format!("conflict on {what}")),
            models::errors::ModelError::Db(msg) => ServiceError::Repository(msg),
        }
    }
}
