use std::sync::Arc;

use parking_lot::RwLock;

use crate::events::core::{Event, HandlerRef};

use super::errors::{DispatchError, DispatchReport};
use super::event_dispatcher::{dispatch, dispatch_isolated, EventDispatcher, EventRegistry};

// ============================================================================
// Shared Event Dispatcher - Cross-thread access to one registry
// ============================================================================
//
// Registry mutations take the write lock. Notify copies the handler list
// under the read lock and runs the handlers after releasing it, so a handler
// may register or unregister without deadlocking. A notify that races with
// a mutation sees the list as it was when the copy was taken.
//
// ============================================================================

#[derive(Clone, Default)]
pub struct SharedEventDispatcher {
    inner: Arc<RwLock<EventDispatcher>>,
}

impl SharedEventDispatcher {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dispatcher)),
        }
    }

    pub fn register(&self, event_name: impl Into<String>, handler: HandlerRef) {
        self.inner.write().register(event_name, handler);
    }

    pub fn unregister(&self, event_name: &str, handler: &HandlerRef) {
        self.inner.write().unregister(event_name, handler);
    }

    pub fn unregister_all(&self) {
        self.inner.write().unregister_all();
    }

    pub fn notify(&self, event: &dyn Event) -> Result<(), DispatchError> {
        let (handlers, metrics) = {
            let dispatcher = self.inner.read();
            match dispatcher.handlers_for(event.name()) {
                Some(handlers) => (handlers.to_vec(), dispatcher.metrics().cloned()),
                None => return Ok(()),
            }
        };

        dispatch(event, &handlers, metrics.as_deref())
    }

    pub fn notify_isolated(&self, event: &dyn Event) -> DispatchReport {
        let (handlers, metrics) = {
            let dispatcher = self.inner.read();
            match dispatcher.handlers_for(event.name()) {
                Some(handlers) => (handlers.to_vec(), dispatcher.metrics().cloned()),
                None => return DispatchReport::default(),
            }
        };

        dispatch_isolated(event, &handlers, metrics.as_deref())
    }

    /// Point-in-time copy of the registry
    pub fn snapshot(&self) -> EventRegistry {
        self.inner.read().event_handlers().clone()
    }

    pub fn handler_count(&self, event_name: &str) -> Option<usize> {
        self.inner.read().handlers_for(event_name).map(<[HandlerRef]>::len)
    }
}

impl From<EventDispatcher> for SharedEventDispatcher {
    fn from(dispatcher: EventDispatcher) -> Self {
        Self::new(dispatcher)
    }
}

impl std::fmt::Debug for SharedEventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedEventDispatcher")
            .field(&*self.inner.read())
            .finish()
    }
}
