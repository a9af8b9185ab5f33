//! Domain entities and rules exposed by the customer service layer.

pub mod criteria;
pub mod customer;
pub mod types;
