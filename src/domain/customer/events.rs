use std::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::{Event, NamedEvent};

use super::entity::Customer;
use super::value_objects::Address;

// ============================================================================
// Customer Domain Events
// ============================================================================

/// Customer state carried by customer events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: String,
    pub name: String,
    pub address: Option<Address>,
}

impl From<&Customer> for CustomerSnapshot {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            address: customer.address().cloned(),
        }
    }
}

/// Raised once a customer has been created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedEvent {
    pub occurred_at: DateTime<Utc>,
    pub event_data: CustomerSnapshot,
}

impl CustomerCreatedEvent {
    pub fn new(customer: &Customer) -> Self {
        Self {
            occurred_at: Utc::now(),
            event_data: customer.into(),
        }
    }
}

impl Event for CustomerCreatedEvent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl NamedEvent for CustomerCreatedEvent {
    const NAME: &'static str = "CustomerCreatedEvent";
}

/// Raised when a customer's address is replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAddressUpdatedEvent {
    pub occurred_at: DateTime<Utc>,
    pub event_data: CustomerSnapshot,
}

impl CustomerAddressUpdatedEvent {
    pub fn new(customer: &Customer) -> Self {
        Self {
            occurred_at: Utc::now(),
            event_data: customer.into(),
        }
    }
}

impl Event for CustomerAddressUpdatedEvent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl NamedEvent for CustomerAddressUpdatedEvent {
    const NAME: &'static str = "CustomerAddressUpdatedEvent";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_created_event_snapshot() {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.change_address(Address::new("Street 1", 21, "ZipCode 1", "City 1").unwrap());

        let event = CustomerCreatedEvent::new(&customer);

        assert_eq!(event.name(), "CustomerCreatedEvent");
        assert_eq!(event.event_data.id, "1");
        assert_eq!(event.event_data.name, "Customer 1");
        assert_eq!(event.event_data.address.as_ref(), customer.address());
    }

    #[test]
    fn test_address_updated_event_name() {
        let customer = Customer::new("1", "Customer 1").unwrap();
        let event = CustomerAddressUpdatedEvent::new(&customer);

        assert_eq!(event.name(), CustomerAddressUpdatedEvent::NAME);
        assert!(event.event_data.address.is_none());
    }

    #[test]
    fn test_event_serialization() {
        let customer = Customer::new("1", "Customer 1").unwrap();
        let event = CustomerCreatedEvent::new(&customer);

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_data"]["name"], "Customer 1");
    }
}
