use serde::{Deserialize, Serialize};

use crate::domain::types::{CustomerEmail, CustomerId, FirstName, LastName};

/// Lifecycle state of a customer account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    #[default]
    Active,
    Suspended,
}

/// Requested lifecycle change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTransition {
    Suspend,
    Activate,
}

impl CustomerStatus {
    #[must_use]
    pub const fn from_suspended(suspended: bool) -> Self {
        if suspended { Self::Suspended } else { Self::Active }
    }

    #[must_use]
    pub const fn is_suspended(self) -> bool {
        matches!(self, Self::Suspended)
    }

    /// Returns the state reached by applying `transition`.
    ///
    /// Every transition is accepted from either state: suspending a suspended
    /// customer or activating an active one leaves the state unchanged.
    #[must_use]
    pub const fn apply(self, transition: StatusTransition) -> Self {
        match transition {
            StatusTransition::Suspend => Self::Suspended,
            StatusTransition::Activate => Self::Active,
        }
    }
}

/// A persisted customer record as exposed on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: CustomerEmail,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub suspended: bool,
}

impl Customer {
    #[must_use]
    pub const fn status(&self) -> CustomerStatus {
        CustomerStatus::from_suspended(self.suspended)
    }
}

/// Validated data for a customer that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCustomer {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: CustomerEmail,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub suspended: bool,
}

impl NewCustomer {
    #[must_use]
    pub fn new(
        first_name: FirstName,
        last_name: LastName,
        email: CustomerEmail,
        phone_number: Option<String>,
        address: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone_number,
            address,
            suspended: false,
        }
    }

    #[must_use]
    pub fn suspended(mut self, suspended: bool) -> Self {
        self.suspended = suspended;
        self
    }

    /// Binds the record to the identifier handed out by storage.
    #[must_use]
    pub fn into_customer(self, id: CustomerId) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            suspended: self.suspended,
        }
    }
}

/// Full replacement of the mutable customer fields.
///
/// `suspended` is only touched when the payload supplied it explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub first_name: FirstName,
    pub last_name: LastName,
    pub email: CustomerEmail,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub suspended: Option<bool>,
}

impl UpdateCustomer {
    /// Produces the updated record, keeping the id of `current`.
    #[must_use]
    pub fn apply_to(self, current: &Customer) -> Customer {
        Customer {
            id: current.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            suspended: self.suspended.unwrap_or(current.suspended),
        }
    }
}
