// ============================================================================
// Shared Domain Contracts
// ============================================================================

pub mod repository;

pub use repository::{Repository, RepositoryError};
