//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, non-empty
//! names) so that once a value reaches the domain layer it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CustomerId, "Unique identifier for a customer.");

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(FirstName, "Customer given name.");
non_empty_string_newtype!(LastName, "Customer family name.");
non_empty_string_newtype!(
    CustomerEmail,
    "Customer contact email. Only presence is enforced, not the address format."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_rejects_non_positive_values() {
        assert_eq!(CustomerId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CustomerId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(CustomerId::new(7).map(CustomerId::get), Ok(7));
    }

    #[test]
    fn names_are_trimmed_and_must_not_be_blank() {
        assert_eq!(FirstName::new("  Ada ").unwrap().as_str(), "Ada");
        assert_eq!(LastName::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(FirstName::new(""), Err(TypeConstraintError::EmptyString));
    }

    #[test]
    fn email_is_not_format_checked() {
        let email = CustomerEmail::new("not-an-email").unwrap();
        assert_eq!(email.as_str(), "not-an-email");
    }

    #[test]
    fn newtypes_serialize_as_plain_values() {
        let id = CustomerId::new(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let name = FirstName::new("Ada").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Ada\"");
    }
}
