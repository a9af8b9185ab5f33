use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::domain::customer::Customer;
use crate::domain::types::CustomerId;
use crate::models::customer::{
    Customer as DbCustomer, NewCustomer as DbNewCustomer, NextCustomerId,
    UpdateCustomer as DbUpdateCustomer,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerReader, CustomerWriter, DieselRepository};
use crate::schema::customers;

/// Highest id ever handed out, taken from the AUTOINCREMENT sequence so that
/// deleted ids are not reissued.
const NEXT_ID_QUERY: &str = "SELECT MAX(\
    COALESCE((SELECT seq FROM sqlite_sequence WHERE name = 'customers'), 0), \
    COALESCE((SELECT MAX(id) FROM customers), 0)\
    ) + 1 AS next_id";

const BUMP_SEQUENCE: &str = "UPDATE sqlite_sequence SET seq = ? WHERE name = 'customers'";
const SEED_SEQUENCE: &str = "INSERT INTO sqlite_sequence (name, seq) VALUES ('customers', ?)";

fn into_domain(customer: DbCustomer) -> RepositoryResult<Customer> {
    Customer::try_from(customer).map_err(RepositoryError::from)
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        let mut conn = self.conn()?;
        let customer = customers::table
            .find(id.get())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        customer.map(into_domain).transpose()
    }

    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        let mut conn = self.conn()?;

        customers::table
            .order(customers::id.asc())
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect()
    }
}

impl CustomerWriter for DieselRepository {
    fn next_customer_id(&self) -> RepositoryResult<CustomerId> {
        let mut conn = self.conn()?;

        // The sequence is advanced under a write lock, so concurrent callers
        // never observe the same value.
        let next_id = conn.immediate_transaction(|conn| -> RepositoryResult<i32> {
            let next = diesel::sql_query(NEXT_ID_QUERY).get_result::<NextCustomerId>(conn)?;
            let bumped = diesel::sql_query(BUMP_SEQUENCE)
                .bind::<Integer, _>(next.next_id)
                .execute(conn)?;
            if bumped == 0 {
                diesel::sql_query(SEED_SEQUENCE)
                    .bind::<Integer, _>(next.next_id)
                    .execute(conn)?;
            }
            Ok(next.next_id)
        })?;

        CustomerId::new(next_id).map_err(RepositoryError::from)
    }

    fn insert_customer(&self, customer: &Customer) -> RepositoryResult<Customer> {
        let mut conn = self.conn()?;
        let insertable: DbNewCustomer = customer.into();

        let inserted = diesel::insert_into(customers::table)
            .values(&insertable)
            .get_result::<DbCustomer>(&mut conn)?;

        into_domain(inserted)
    }

    fn replace_customer(&self, customer: &Customer) -> RepositoryResult<Customer> {
        let mut conn = self.conn()?;
        let changes: DbUpdateCustomer = customer.into();

        let updated = diesel::update(customers::table.find(customer.id.get()))
            .set(&changes)
            .get_result::<DbCustomer>(&mut conn)?;

        into_domain(updated)
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        diesel::delete(customers::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
