use async_trait::async_trait;

// ============================================================================
// Repository Contract - Persistence port for entities
// ============================================================================
//
// Implemented by the adapters in src/infrastructure/. Domain services depend
// on this trait only.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Stored {entity} {id} is invalid: {reason}")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        reason: String,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

#[async_trait]
pub trait Repository<T: Send + Sync>: Send + Sync {
    async fn create(&self, entity: &T) -> Result<(), RepositoryError>;

    async fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Update several entities. Adapters that can should apply all or none.
    async fn update_all(&self, entities: &[T]) -> Result<(), RepositoryError> {
        for entity in entities {
            self.update(entity).await?;
        }
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<T, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
}
