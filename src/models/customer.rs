use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;
use crate::domain::types::{CustomerEmail, CustomerId, FirstName, LastName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub suspended: bool,
}

#[derive(QueryableByName)]
/// Result row of the next-identifier lookup.
pub struct NextCustomerId {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub next_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`] carrying a pre-assigned id.
pub struct NewCustomer<'a> {
    pub id: i32,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub suspended: bool,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(treat_none_as_null = true)]
/// Full replacement of the mutable columns of a [`Customer`] record.
pub struct UpdateCustomer<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone_number: Option<&'a str>,
    pub address: Option<&'a str>,
    pub suspended: bool,
}

impl TryFrom<Customer> for DomainCustomer {
    type Error = TypeConstraintError;

    fn try_from(customer: Customer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CustomerId::new(customer.id)?,
            first_name: FirstName::new(customer.first_name)?,
            last_name: LastName::new(customer.last_name)?,
            email: CustomerEmail::new(customer.email)?,
            phone_number: customer.phone_number,
            address: customer.address,
            suspended: customer.suspended,
        })
    }
}

impl<'a> From<&'a DomainCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainCustomer) -> Self {
        Self {
            id: customer.id.get(),
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            email: customer.email.as_str(),
            phone_number: customer.phone_number.as_deref(),
            address: customer.address.as_deref(),
            suspended: customer.suspended,
        }
    }
}

impl<'a> From<&'a DomainCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainCustomer) -> Self {
        Self {
            first_name: customer.first_name.as_str(),
            last_name: customer.last_name.as_str(),
            email: customer.email.as_str(),
            phone_number: customer.phone_number.as_deref(),
            address: customer.address.as_deref(),
            suspended: customer.suspended,
        }
    }
}
