// ============================================================================
// Customer Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer id is required")]
    EmptyId,

    #[error("Customer name is required")]
    EmptyName,

    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    #[error("Street is required")]
    EmptyStreet,

    #[error("Street number must be greater than zero")]
    InvalidStreetNumber,

    #[error("Zip code is required")]
    EmptyZip,

    #[error("City is required")]
    EmptyCity,
}
