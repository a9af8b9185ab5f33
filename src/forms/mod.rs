//! Payload definitions validated before they reach the domain layer.

use thiserror::Error;

pub mod customer;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing a customer payload.
pub enum FormError {
    #[error("Invalid Customer: body of request contained bad or no data")]
    NotAnObject,

    #[error("Invalid Customer: missing {0}")]
    MissingField(&'static str),

    #[error("Invalid Customer: {field} must be a {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid Customer: {0} cannot be empty")]
    EmptyField(&'static str),
}

impl FormError {
    /// Name of the offending field, when the error concerns a single one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            FormError::NotAnObject => None,
            FormError::MissingField(field)
            | FormError::EmptyField(field)
            | FormError::InvalidType { field, .. } => Some(*field),
        }
    }
}
