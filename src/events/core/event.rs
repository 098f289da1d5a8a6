use std::any::Any;
use std::fmt::Debug;

use chrono::{DateTime, Utc};

// ============================================================================
// Event - What the dispatcher routes
// ============================================================================
//
// An event is routed purely by its name. The dispatcher never looks inside
// the payload; handlers recover the concrete type through `downcast_ref`.
//
// ============================================================================

/// A domain event that can be passed to [`crate::events::EventDispatcher::notify`]
///
/// `name()` is the registry key. It is matched verbatim (case-sensitive, no
/// wildcards) against the names handlers were registered under.
pub trait Event: Debug + Send + Sync + 'static {
    /// Stable identifier used as the registry key
    fn name(&self) -> &str;

    /// When the event was raised
    fn occurred_at(&self) -> DateTime<Utc>;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Event {
    /// Recover the concrete event type, if it matches
    pub fn downcast_ref<E: Event>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }

    pub fn is<E: Event>(&self) -> bool {
        self.as_any().is::<E>()
    }
}

/// Downcast for handlers that only accept one event type.
///
/// Fails with the expected type and the received event name.
pub fn expect_event<E: Event>(event: &dyn Event) -> anyhow::Result<&E> {
    event.downcast_ref::<E>().ok_or_else(|| {
        anyhow::anyhow!(
            "expected {}, received {}",
            std::any::type_name::<E>(),
            event.name()
        )
    })
}

/// Associates a concrete event type with the name it is dispatched under.
///
/// Handlers are registered with `E::NAME` so the key and the event's
/// `name()` can never drift apart.
pub trait NamedEvent: Event {
    const NAME: &'static str;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct PingEvent {
        occurred_at: DateTime<Utc>,
        payload: String,
    }

    impl Event for PingEvent {
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

    impl NamedEvent for PingEvent {
        const NAME: &'static str = "PingEvent";
    }

    #[derive(Debug)]
    struct PongEvent;

    impl Event for PongEvent {
        fn name(&self) -> &str {
            "PongEvent"
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            Utc::now()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_downcast_to_concrete_event() {
        let event = PingEvent {
            occurred_at: Utc::now(),
            payload: "hello".to_string(),
        };
        let dyn_event: &dyn Event = &event;

        assert_eq!(dyn_event.name(), "PingEvent");
        assert!(dyn_event.is::<PingEvent>());

        let ping = dyn_event.downcast_ref::<PingEvent>().unwrap();
        assert_eq!(ping.payload, "hello");
    }

    #[test]
    fn test_downcast_to_wrong_type_is_none() {
        let dyn_event: &dyn Event = &PongEvent;

        assert!(dyn_event.downcast_ref::<PingEvent>().is_none());
        assert!(!dyn_event.is::<PingEvent>());
    }

    #[test]
    fn test_expect_event_reports_received_name() {
        let err = expect_event::<PingEvent>(&PongEvent).unwrap_err();
        assert!(err.to_string().contains("received PongEvent"));
    }
}
