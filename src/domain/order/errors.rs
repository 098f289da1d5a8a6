// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order id is required")]
    EmptyId,

    #[error("Customer id is required")]
    EmptyCustomerId,

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Order item id is required")]
    EmptyItemId,

    #[error("Order item product id is required")]
    EmptyProductId,

    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Item price must be greater than or equal to zero, got {0}")]
    NegativePrice(f64),

    #[error("Order item not found: {0}")]
    ItemNotFound(String),
}
