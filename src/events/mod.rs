// ============================================================================
// Domain Events Infrastructure
// ============================================================================
//
// Generic, reusable event publication. Domain-specific events and
// handlers are in src/domain/
//
// ============================================================================

mod core;
mod dispatch;

pub use self::core::*;
pub use self::dispatch::*;
