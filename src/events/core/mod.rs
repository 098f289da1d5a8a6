// ============================================================================
// Domain Events Core - Generic Abstractions
// ============================================================================
//
// Event and handler contracts shared by every aggregate.
// No domain-specific code lives here.
//
// ============================================================================

pub mod event;
pub mod handler;

pub use event::{expect_event, Event, NamedEvent};
pub use handler::{same_handler, EventHandler, HandlerRef};
