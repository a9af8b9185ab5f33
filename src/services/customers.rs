//! Customer directory: create, read, update, delete, search and lifecycle
//! transitions over a [`CustomerReader`] + [`CustomerWriter`] store.

use serde_json::Value;

use crate::domain::criteria::CustomerCriteria;
use crate::domain::customer::{Customer, NewCustomer, StatusTransition, UpdateCustomer};
use crate::domain::types::CustomerId;
use crate::forms::customer::CustomerForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Ids that can never exist in storage resolve to `None`.
fn existing_id(id: i32) -> Option<CustomerId> {
    CustomerId::new(id).ok()
}

fn storage_error(action: &str) -> impl FnOnce(RepositoryError) -> ServiceError + '_ {
    move |err| {
        log::error!("Failed to {action}: {err}");
        ServiceError::from(err)
    }
}

fn find_customer<R>(repo: &R, id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    let Some(customer_id) = existing_id(id) else {
        return Err(ServiceError::NotFound(id));
    };
    repo.get_customer_by_id(customer_id)
        .map_err(storage_error("load customer"))?
        .ok_or(ServiceError::NotFound(id))
}

fn replace<R>(repo: &R, customer: &Customer) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.replace_customer(customer).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound(customer.id.get()),
        other => storage_error("update customer")(other),
    })
}

/// Validates `payload` and stores it as a new customer.
///
/// The stored record starts active unless the payload sets `suspended`.
pub fn create_customer<R>(repo: &R, payload: &Value) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    log::info!("Request to create a customer");
    let form = CustomerForm::from_json(payload)?;
    let new_customer = NewCustomer::try_from(form)?;

    let id = repo
        .next_customer_id()
        .map_err(storage_error("reserve customer id"))?;
    let customer = repo
        .insert_customer(&new_customer.into_customer(id))
        .map_err(storage_error("create customer"))?;

    log::info!("Customer with new id [{}] saved", customer.id);
    Ok(customer)
}

/// Fetches a single customer.
pub fn get_customer<R>(repo: &R, id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    log::info!("Request to retrieve a customer with id [{id}]");
    find_customer(repo, id)
}

/// Lists customers matching every supplied criterion, in insertion order.
pub fn list_customers<R>(repo: &R, criteria: &CustomerCriteria) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    log::info!("Request for customer list with {criteria:?}");
    let customers = repo
        .list_customers()
        .map_err(storage_error("list customers"))?;
    let customers = criteria.filter(customers);
    log::info!("Returning {} customers", customers.len());
    Ok(customers)
}

/// Replaces the mutable fields of an existing customer.
///
/// `id` is kept, and `suspended` only changes when the payload supplies it.
pub fn update_customer<R>(repo: &R, id: i32, payload: &Value) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    log::info!("Request to update a customer with id [{id}]");
    let current = find_customer(repo, id)?;
    let form = CustomerForm::from_json(payload)?;
    let updates = UpdateCustomer::try_from(form)?;

    let customer = replace(repo, &updates.apply_to(&current))?;
    log::info!("Customer with id [{id}] updated");
    Ok(customer)
}

/// Removes a customer. Missing ids succeed silently.
pub fn delete_customer<R>(repo: &R, id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    log::info!("Request to delete a customer with id [{id}]");
    if let Some(customer_id) = existing_id(id) {
        repo.delete_customer(customer_id)
            .map_err(storage_error("delete customer"))?;
    }
    log::info!("Customer with id [{id}] delete complete");
    Ok(())
}

/// Marks the customer suspended. Suspending twice is not an error.
pub fn suspend_customer<R>(repo: &R, id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    transition_customer(repo, id, StatusTransition::Suspend)
}

/// Marks the customer active. Activating twice is not an error.
pub fn activate_customer<R>(repo: &R, id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    transition_customer(repo, id, StatusTransition::Activate)
}

fn transition_customer<R>(repo: &R, id: i32, transition: StatusTransition) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    log::info!("Request to {transition:?} customer with id [{id}]");
    let mut customer = find_customer(repo, id)?;
    customer.suspended = customer.status().apply(transition).is_suspended();

    let customer = replace(repo, &customer)?;
    log::info!("Customer with id [{id}] is now {:?}", customer.status());
    Ok(customer)
}
