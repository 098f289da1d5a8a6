use async_trait::async_trait;
use sqlx::sqlite::{SqliteExecutor, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::domain::product::Product;
use crate::domain::shared::{Repository, RepositoryError};

// ============================================================================
// Product Repository
// ============================================================================

const ENTITY: &str = "Product";

#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for ProductRepository {
    async fn create(&self, entity: &Product) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(entity.id())
            .bind(entity.name())
            .bind(entity.price())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, entity: &Product) -> Result<(), RepositoryError> {
        update_row(&self.pool, entity).await
    }

    /// Runs in one transaction; an unknown id rolls back every update
    async fn update_all(&self, entities: &[Product]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        for entity in entities {
            update_row(&mut *tx, entity).await?;
        }
        tx.commit().await?;

        tracing::debug!(products = entities.len(), "Updated products");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, RepositoryError> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            })?;

        product_from_row(&row)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, price FROM products ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(product_from_row).collect()
    }
}

async fn update_row<'c>(
    executor: impl SqliteExecutor<'c>,
    entity: &Product,
) -> Result<(), RepositoryError> {
    let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
        .bind(entity.name())
        .bind(entity.price())
        .bind(entity.id())
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound {
            entity: ENTITY,
            id: entity.id().to_string(),
        });
    }
    Ok(())
}

fn product_from_row(row: &SqliteRow) -> Result<Product, RepositoryError> {
    let id: String = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let price: f64 = row.try_get("price")?;

    Product::new(id.clone(), name, price).map_err(|e| RepositoryError::InvalidRecord {
        entity: ENTITY,
        id,
        reason: e.to_string(),
    })
}
