use std::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::{Event, NamedEvent};

// ============================================================================
// Product Domain Events
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Raised once a product has been created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedEvent {
    pub occurred_at: DateTime<Utc>,
    pub event_data: ProductCreated,
}

impl ProductCreatedEvent {
    pub fn new(event_data: ProductCreated) -> Self {
        Self {
            occurred_at: Utc::now(),
            event_data,
        }
    }
}

impl Event for ProductCreatedEvent {
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

impl NamedEvent for ProductCreatedEvent {
    const NAME: &'static str = "ProductCreatedEvent";
}
