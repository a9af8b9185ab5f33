//! Attribute filters applied to customer listings.
//!
//! Every supplied criterion must hold (logical AND). Text fields use exact,
//! case-sensitive equality; there is no partial or fuzzy matching.

use crate::domain::customer::Customer;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerCriteria {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub suspended: Option<bool>,
}

impl CustomerCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn suspended(mut self, value: bool) -> Self {
        self.suspended = Some(value);
        self
    }

    /// True when no criterion is set and every record matches.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.suspended.is_none()
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        text_matches(self.first_name.as_deref(), Some(customer.first_name.as_str()))
            && text_matches(self.last_name.as_deref(), Some(customer.last_name.as_str()))
            && text_matches(self.email.as_deref(), Some(customer.email.as_str()))
            && text_matches(
                self.phone_number.as_deref(),
                customer.phone_number.as_deref(),
            )
            && self.suspended.is_none_or(|wanted| wanted == customer.suspended)
    }

    /// Keeps the matching customers in their original order.
    pub fn filter(&self, customers: Vec<Customer>) -> Vec<Customer> {
        if self.is_empty() {
            return customers;
        }
        customers.into_iter().filter(|c| self.matches(c)).collect()
    }
}

fn text_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}
