// ============================================================================
// Customer Domain
// ============================================================================
//
// - Value objects (Address)
// - Entity (Customer)
// - Events (CustomerCreatedEvent, CustomerAddressUpdatedEvent)
// - Handlers reacting to those events
// - Errors (CustomerError enum)
// - Service (CustomerService: persist, then notify)
//
// ============================================================================

pub mod value_objects;
pub mod entity;
pub mod events;
pub mod handlers;
pub mod errors;
pub mod service;

// Re-export for convenience
pub use value_objects::*;
pub use entity::*;
pub use events::*;
pub use handlers::*;
pub use errors::*;
pub use service::*;
