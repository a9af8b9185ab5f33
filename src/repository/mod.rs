//! Persistence ports consumed by the customer services and their adapters.

use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryRepository;

/// Diesel-backed repository sharing a SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    /// Every stored customer in insertion order.
    fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
}

pub trait CustomerWriter {
    /// Reserves the identifier for the next insert. Identifiers are never reused.
    fn next_customer_id(&self) -> RepositoryResult<CustomerId>;
    fn insert_customer(&self, customer: &Customer) -> RepositoryResult<Customer>;
    /// Overwrites the stored record with the same id; `NotFound` when absent.
    fn replace_customer(&self, customer: &Customer) -> RepositoryResult<Customer>;
    /// Removes the record if present. Absent ids are not an error.
    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()>;
}
