// ============================================================================
// Product Domain
// ============================================================================

pub mod entity;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod service;

pub use entity::*;
pub use errors::*;
pub use events::*;
pub use handlers::*;
pub use service::*;
