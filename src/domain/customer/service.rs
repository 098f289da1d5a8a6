use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use crate::domain::shared::Repository;
use crate::events::SharedEventDispatcher;

use super::entity::Customer;
use super::events::{CustomerAddressUpdatedEvent, CustomerCreatedEvent};
use super::value_objects::Address;

// ============================================================================
// Customer Service
// ============================================================================
//
// Orchestrates: Entity change → Repository → Dispatcher
//
// Events are raised only after the change has been persisted.
//
// ============================================================================

pub struct CustomerService<R: Repository<Customer>> {
    repository: Arc<R>,
    dispatcher: SharedEventDispatcher,
}

impl<R: Repository<Customer>> CustomerService<R> {
    pub fn new(repository: Arc<R>, dispatcher: SharedEventDispatcher) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Persist a new customer, then raise `CustomerCreatedEvent`.
    ///
    /// A handler failure is returned as a [`DispatchError`] after the customer
    /// has been stored; any other error means nothing was written.
    ///
    /// [`DispatchError`]: crate::events::DispatchError
    pub async fn create(&self, name: &str, address: Option<Address>) -> Result<Customer> {
        let mut customer = Customer::new(Uuid::new_v4().to_string(), name)?;
        if let Some(address) = address {
            customer.change_address(address);
        }

        self.repository.create(&customer).await?;
        tracing::info!(customer_id = %customer.id(), "Customer created");

        self.dispatcher.notify(&CustomerCreatedEvent::new(&customer))?;
        Ok(customer)
    }

    /// Same failure contract as [`Self::create`]: a [`DispatchError`] means
    /// the new address is already stored.
    ///
    /// [`DispatchError`]: crate::events::DispatchError
    pub async fn change_address(&self, customer_id: &str, address: Address) -> Result<Customer> {
        let mut customer = self.repository.find(customer_id).await?;
        customer.change_address(address);

        self.repository.update(&customer).await?;
        tracing::info!(customer_id = %customer.id(), "Customer address changed");

        self.dispatcher.notify(&CustomerAddressUpdatedEvent::new(&customer))?;
        Ok(customer)
    }
}
