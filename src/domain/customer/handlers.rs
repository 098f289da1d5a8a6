use crate::events::{expect_event, Event, EventHandler};

use super::events::{CustomerAddressUpdatedEvent, CustomerCreatedEvent};

// ============================================================================
// Customer Event Handlers
// ============================================================================

pub struct FirstCustomerCreatedLogHandler;

impl EventHandler for FirstCustomerCreatedLogHandler {
    fn handle(&self, event: &dyn Event) -> anyhow::Result<()> {
        let event = expect_event::<CustomerCreatedEvent>(event)?;
        tracing::info!(
            customer_id = %event.event_data.id,
            "First log handler for CustomerCreatedEvent"
        );
        Ok(())
    }
}

pub struct SecondCustomerCreatedLogHandler;

impl EventHandler for SecondCustomerCreatedLogHandler {
    fn handle(&self, event: &dyn Event) -> anyhow::Result<()> {
        let event = expect_event::<CustomerCreatedEvent>(event)?;
        tracing::info!(
            customer_id = %event.event_data.id,
            "Second log handler for CustomerCreatedEvent"
        );
        Ok(())
    }
}

pub struct CustomerAddressChangedLogHandler;

impl CustomerAddressChangedLogHandler {
    pub fn message(event: &CustomerAddressUpdatedEvent) -> String {
        let data = &event.event_data;
        let address = data
            .address
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "no address".to_string());
        format!("Address of customer {}, {} changed to {}", data.id, data.name, address)
    }
}

impl EventHandler for CustomerAddressChangedLogHandler {
    fn handle(&self, event: &dyn Event) -> anyhow::Result<()> {
        let event = expect_event::<CustomerAddressUpdatedEvent>(event)?;
        tracing::info!("{}", Self::message(event));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Address, Customer};

    fn customer_with_address() -> Customer {
        let mut customer = Customer::new("1", "Customer 1").unwrap();
        customer.change_address(Address::new("Street 2", 22, "ZipCode 2", "City 2").unwrap());
        customer
    }

    #[test]
    fn test_created_handlers_accept_created_event() {
        let event = CustomerCreatedEvent::new(&customer_with_address());

        assert!(FirstCustomerCreatedLogHandler.handle(&event).is_ok());
        assert!(SecondCustomerCreatedLogHandler.handle(&event).is_ok());
    }

    #[test]
    fn test_handlers_reject_foreign_events() {
        let created = CustomerCreatedEvent::new(&customer_with_address());
        let updated = CustomerAddressUpdatedEvent::new(&customer_with_address());

        assert!(FirstCustomerCreatedLogHandler.handle(&updated).is_err());
        assert!(CustomerAddressChangedLogHandler.handle(&created).is_err());
    }

    #[test]
    fn test_address_changed_message() {
        let event = CustomerAddressUpdatedEvent::new(&customer_with_address());

        assert_eq!(
            CustomerAddressChangedLogHandler::message(&event),
            "Address of customer 1, Customer 1 changed to Street 2, 22, ZipCode 2 City 2"
        );
        assert!(CustomerAddressChangedLogHandler.handle(&event).is_ok());
    }
}
