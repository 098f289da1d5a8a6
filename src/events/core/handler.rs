use std::sync::Arc;

use super::event::Event;

// ============================================================================
// Event Handler - The single-method callback contract
// ============================================================================

/// Reaction logic invoked once per matching notified event.
///
/// Handlers are independent implementations with no shared state. They
/// receive the event exactly as it was passed to `notify`.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &dyn Event) -> anyhow::Result<()>;
}

/// Shared reference to a registered handler.
///
/// Two `HandlerRef`s are the same handler when they point at the same
/// allocation (see [`same_handler`]).
pub type HandlerRef = Arc<dyn EventHandler>;

/// Identity comparison for handler references.
///
/// Only the data pointer is compared, vtable pointers are ignored since they
/// are not guaranteed unique per type.
pub fn same_handler(a: &HandlerRef, b: &HandlerRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl<F> EventHandler for F
where
    F: Fn(&dyn Event) -> anyhow::Result<()> + Send + Sync,
{
    fn handle(&self, event: &dyn Event) -> anyhow::Result<()> {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopHandler;

    impl EventHandler for NoopHandler {
        fn handle(&self, _event: &dyn Event) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_clones_are_the_same_handler() {
        let handler: HandlerRef = Arc::new(NoopHandler);
        let clone = handler.clone();

        assert!(same_handler(&handler, &clone));
    }

    #[test]
    fn test_distinct_instances_are_different_handlers() {
        let a: HandlerRef = Arc::new(NoopHandler);
        let b: HandlerRef = Arc::new(NoopHandler);

        assert!(!same_handler(&a, &b));
    }
}
