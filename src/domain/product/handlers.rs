use crate::events::{expect_event, Event, EventHandler};

use super::events::ProductCreatedEvent;

// ============================================================================
// Product Event Handlers
// ============================================================================

pub struct SendEmailWhenProductIsCreatedHandler;

impl EventHandler for SendEmailWhenProductIsCreatedHandler {
    fn handle(&self, event: &dyn Event) -> anyhow::Result<()> {
        let event = expect_event::<ProductCreatedEvent>(event)?;
        tracing::info!(
            product = %event.event_data.name,
            price = event.event_data.price,
            occurred_at = %event.occurred_at(),
            "Sending email: product created"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductCreated;

    #[test]
    fn test_handles_product_created() {
        let event = ProductCreatedEvent::new(ProductCreated {
            name: "Product 1".to_string(),
            description: "Product 1 description".to_string(),
            price: 10.0,
        });

        assert!(SendEmailWhenProductIsCreatedHandler.handle(&event).is_ok());
    }
}
