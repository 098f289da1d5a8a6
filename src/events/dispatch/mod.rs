// ============================================================================
// Event Dispatch - Registry and synchronous fan-out
// ============================================================================

pub mod errors;
pub mod event_dispatcher;
pub mod shared;

pub use errors::{DispatchError, DispatchReport, HandlerFailure};
pub use event_dispatcher::{EventDispatcher, EventRegistry};
pub use shared::SharedEventDispatcher;
