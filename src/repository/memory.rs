//! In-process repository used by tests and embedding callers.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter};

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    customers: BTreeMap<CustomerId, Customer>,
}

/// Customer storage kept in a mutex-guarded ordered map.
///
/// Identifiers come from a counter that only grows, so removing a record
/// never frees its id for reuse.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: Mutex<Store>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(&self) -> RepositoryResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| RepositoryError::Unexpected("customer store lock poisoned".to_string()))
    }
}

impl CustomerReader for InMemoryRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        Ok(self.store()?.customers.get(&id).cloned())
    }

    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.store()?.customers.values().cloned().collect())
    }
}

impl CustomerWriter for InMemoryRepository {
    fn next_customer_id(&self) -> RepositoryResult<CustomerId> {
        let mut store = self.store()?;
        let next = store.last_id + 1;
        let id = CustomerId::new(next)?;
        store.last_id = next;
        Ok(id)
    }

    fn insert_customer(&self, customer: &Customer) -> RepositoryResult<Customer> {
        let mut store = self.store()?;
        if store.customers.contains_key(&customer.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Unique constraint violation: customer {} already exists",
                customer.id
            )));
        }
        store.last_id = store.last_id.max(customer.id.get());
        store.customers.insert(customer.id, customer.clone());
        Ok(customer.clone())
    }

    fn replace_customer(&self, customer: &Customer) -> RepositoryResult<Customer> {
        let mut store = self.store()?;
        match store.customers.get_mut(&customer.id) {
            Some(stored) => {
                *stored = customer.clone();
                Ok(customer.clone())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()> {
        self.store()?.customers.remove(&id);
        Ok(())
    }
}
