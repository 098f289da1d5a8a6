// ============================================================================
// Infrastructure - Persistence adapters
// ============================================================================
//
// Maps domain entities to relational rows with sqlx (SQLite).
//
// ============================================================================

pub mod db;
pub mod repository;

pub use db::{connect, migrate};
pub use repository::{CustomerRepository, OrderRepository, ProductRepository};
