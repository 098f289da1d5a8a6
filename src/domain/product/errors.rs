// ============================================================================
// Product Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Product id is required")]
    EmptyId,

    #[error("Product name is required")]
    EmptyName,

    #[error("Price must be greater than or equal to zero, got {0}")]
    NegativePrice(f64),
}
