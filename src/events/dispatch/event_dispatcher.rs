use std::collections::HashMap;
use std::sync::Arc;

use crate::events::core::{same_handler, Event, HandlerRef};
use crate::metrics::DispatchMetrics;

use super::errors::{DispatchError, DispatchReport, HandlerFailure};

// ============================================================================
// Event Dispatcher - Process-local publish/subscribe registry
// ============================================================================
//
// Maps an event name to the ordered list of handlers registered under it.
//
// Registry invariants:
// - a key exists once `register` ran for it, until `unregister_all`
// - `unregister` may leave a key with an empty list; it never removes keys
// - handler order is insertion order, duplicates are kept
//
// Dispatch is synchronous on the caller's thread. `notify` stops at the first
// failing handler and returns its error; `notify_isolated` runs every handler
// and collects the failures instead.
//
// ============================================================================

pub type EventRegistry = HashMap<String, Vec<HandlerRef>>;

#[derive(Default)]
pub struct EventDispatcher {
    event_handlers: EventRegistry,
    metrics: Option<Arc<DispatchMetrics>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(mut self, metrics: Arc<DispatchMetrics>) -> Self {
        metrics.set_registered_handlers(self.handler_count());
        self.metrics = Some(metrics);
        self
    }

    /// Current registry. Not a copy: later mutations are visible through it.
    pub fn event_handlers(&self) -> &EventRegistry {
        &self.event_handlers
    }

    /// Handlers registered under `event_name`.
    ///
    /// `None` means the name was never registered (or `unregister_all` ran);
    /// `Some(&[])` means every handler was removed with `unregister`.
    pub fn handlers_for(&self, event_name: &str) -> Option<&[HandlerRef]> {
        self.event_handlers.get(event_name).map(Vec::as_slice)
    }

    /// Total number of registrations across all event names
    pub fn handler_count(&self) -> usize {
        self.event_handlers.values().map(Vec::len).sum()
    }

    pub fn register(&mut self, event_name: impl Into<String>, handler: HandlerRef) {
        let event_name = event_name.into();
        let handlers = self.event_handlers.entry(event_name.clone()).or_default();
        handlers.push(handler);

        tracing::debug!(
            event_name = %event_name,
            handlers = handlers.len(),
            "Registered event handler"
        );
        self.sync_gauge();
    }

    /// Remove every registration of `handler` under `event_name`
    pub fn unregister(&mut self, event_name: &str, handler: &HandlerRef) {
        let Some(handlers) = self.event_handlers.get_mut(event_name) else {
            return;
        };

        let before = handlers.len();
        handlers.retain(|registered| !same_handler(registered, handler));

        tracing::debug!(
            event_name = %event_name,
            removed = before - handlers.len(),
            remaining = handlers.len(),
            "Unregistered event handler"
        );
        self.sync_gauge();
    }

    pub fn unregister_all(&mut self) {
        let names = self.event_handlers.len();
        self.event_handlers.clear();

        tracing::debug!(event_names = names, "Unregistered all event handlers");
        self.sync_gauge();
    }

    /// Invoke every handler registered under `event.name()`, in order.
    ///
    /// Returns the first handler error; handlers after it are not invoked.
    pub fn notify(&self, event: &dyn Event) -> Result<(), DispatchError> {
        match self.handlers_for(event.name()) {
            Some(handlers) => dispatch(event, handlers, self.metrics.as_deref()),
            None => {
                tracing::trace!(event_name = %event.name(), "No handlers registered");
                Ok(())
            }
        }
    }

    /// Like `notify`, but a failing handler does not stop the others.
    pub fn notify_isolated(&self, event: &dyn Event) -> DispatchReport {
        match self.handlers_for(event.name()) {
            Some(handlers) => dispatch_isolated(event, handlers, self.metrics.as_deref()),
            None => DispatchReport::default(),
        }
    }

    pub(crate) fn metrics(&self) -> Option<&Arc<DispatchMetrics>> {
        self.metrics.as_ref()
    }

    fn sync_gauge(&self) {
        if let Some(metrics) = &self.metrics {
            metrics.set_registered_handlers(self.handler_count());
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<&str, usize> = self
            .event_handlers
            .iter()
            .map(|(name, handlers)| (name.as_str(), handlers.len()))
            .collect();

        f.debug_struct("EventDispatcher")
            .field("event_handlers", &counts)
            .finish()
    }
}

pub(crate) fn dispatch(
    event: &dyn Event,
    handlers: &[HandlerRef],
    metrics: Option<&DispatchMetrics>,
) -> Result<(), DispatchError> {
    let event_name = event.name();
    if let Some(metrics) = metrics {
        metrics.record_notify(event_name);
    }

    for (position, handler) in handlers.iter().enumerate() {
        tracing::trace!(event_name = %event_name, position, "Invoking handler");

        let result = handler.handle(event);
        if let Some(metrics) = metrics {
            metrics.record_invocation(event_name, result.is_ok());
        }

        if let Err(source) = result {
            tracing::warn!(
                event_name = %event_name,
                position,
                skipped = handlers.len() - position - 1,
                error = %source,
                "Event handler failed"
            );
            return Err(DispatchError::HandlerFailed {
                event_name: event_name.to_string(),
                position,
                source,
            });
        }
    }

    Ok(())
}

pub(crate) fn dispatch_isolated(
    event: &dyn Event,
    handlers: &[HandlerRef],
    metrics: Option<&DispatchMetrics>,
) -> DispatchReport {
    let event_name = event.name();
    if let Some(metrics) = metrics {
        metrics.record_notify(event_name);
    }

    let mut report = DispatchReport::default();
    for (position, handler) in handlers.iter().enumerate() {
        let result = handler.handle(event);
        report.invoked += 1;
        if let Some(metrics) = metrics {
            metrics.record_invocation(event_name, result.is_ok());
        }

        if let Err(error) = result {
            tracing::warn!(event_name = %event_name, position, error = %error, "Event handler failed");
            report.failures.push(HandlerFailure { position, error });
        }
    }

    report
}

// ============================================================================
// Unit Tests
// ============================================================================
