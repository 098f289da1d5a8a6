// ============================================================================
// Repositories - sqlx adapters for the domain `Repository` trait
// ============================================================================

pub mod customer_repository;
pub mod product_repository;
pub mod order_repository;

pub use customer_repository::CustomerRepository;
pub use product_repository::ProductRepository;
pub use order_repository::OrderRepository;
