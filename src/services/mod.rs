//! Business operations composed over the repository ports.

use thiserror::Error;

pub mod customers;

/// Failures surfaced by service operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The payload failed validation; the message names the offending field.
    #[error("{0}")]
    Validation(String),

    #[error("Customer with id '{0}' was not found.")]
    NotFound(i32),

    /// Persistence failure, not retried here.
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
