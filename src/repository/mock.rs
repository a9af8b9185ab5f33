//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerReader, CustomerWriter};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self) -> RepositoryResult<Vec<Customer>>;
    }

    impl CustomerWriter for Repository {
        fn next_customer_id(&self) -> RepositoryResult<CustomerId>;
        fn insert_customer(&self, customer: &Customer) -> RepositoryResult<Customer>;
        fn replace_customer(&self, customer: &Customer) -> RepositoryResult<Customer>;
        fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()>;
    }
}
