// ============================================================================
// Order Domain - Checkout
// ============================================================================
//
// - Entities (Order aggregate, OrderItem)
// - Errors (OrderError enum)
// - Service (place_order, total)
//
// ============================================================================

pub mod order_item;
pub mod entity;
pub mod errors;
pub mod service;

pub use order_item::*;
pub use entity::*;
pub use errors::*;
pub use service::{place_order, total};
