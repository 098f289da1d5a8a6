// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Entities, value objects, domain events and their handlers. Each aggregate
// has its own subdirectory. Persistence lives in src/infrastructure/ behind
// the `Repository` trait from `shared`.
//
// ============================================================================

pub mod shared;
pub mod customer;
pub mod product;
pub mod order;
