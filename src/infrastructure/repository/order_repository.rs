use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};

use crate::domain::order::{Order, OrderItem};
use crate::domain::shared::{Repository, RepositoryError};

// ============================================================================
// Order Repository
// ============================================================================
//
// An order is one `orders` row plus its `order_items` rows.
//
// `order_items.price` holds the line total (unit price x quantity) and
// `order_items.unit_price` the unit price items are rebuilt from.
// `orders.total` is rewritten on every update.
//
// ============================================================================

const ENTITY: &str = "Order";

#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn insert_items(
        tx: &mut Transaction<'_, Sqlite>,
        order: &Order,
    ) -> Result<(), RepositoryError> {
        for item in order.items() {
            sqlx::query(
                "INSERT INTO order_items (id, order_id, product_id, name, unit_price, price, quantity)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(item.id())
            .bind(order.id())
            .bind(item.product_id())
            .bind(item.name())
            .bind(item.price())
            .bind(item.total())
            .bind(i64::from(item.quantity()))
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn load_items(&self, order_id: Option<&str>) -> Result<HashMap<String, Vec<OrderItem>>, RepositoryError> {
        let rows = match order_id {
            Some(order_id) => {
                sqlx::query(
                    "SELECT id, order_id, product_id, name, unit_price, quantity
                     FROM order_items WHERE order_id = ? ORDER BY rowid",
                )
                .bind(order_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT id, order_id, product_id, name, unit_price, quantity
                     FROM order_items ORDER BY rowid",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        let mut items: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in &rows {
            let order_id: String = row.try_get("order_id")?;
            let item = item_from_row(row, &order_id)?;
            items.entry(order_id).or_default().push(item);
        }
        Ok(items)
    }
}

#[async_trait]
impl Repository<Order> for OrderRepository {
    async fn create(&self, entity: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(entity.id())
            .bind(entity.customer_id())
            .bind(entity.total())
            .execute(&mut *tx)
            .await?;
        Self::insert_items(&mut tx, entity).await?;

        tx.commit().await?;
        tracing::debug!(
            order_id = %entity.id(),
            items = entity.items().len(),
            "Inserted order"
        );
        Ok(())
    }

    /// Replace every item row and rewrite the total
    async fn update(&self, entity: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET total = ? WHERE id = ?")
            .bind(entity.total())
            .bind(entity.id())
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: ENTITY,
                id: entity.id().to_string(),
            });
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(entity.id())
            .execute(&mut *tx)
            .await?;
        Self::insert_items(&mut tx, entity).await?;

        tx.commit().await?;
        tracing::debug!(
            order_id = %entity.id(),
            items = entity.items().len(),
            "Updated order"
        );
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, RepositoryError> {
        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: ENTITY,
                id: id.to_string(),
            })?;

        let mut items = self.load_items(Some(id)).await?;
        order_from_row(&row, &mut items)
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        let mut items = self.load_items(None).await?;
        rows.iter()
            .map(|row| order_from_row(row, &mut items))
            .collect()
    }
}

fn order_from_row(
    row: &SqliteRow,
    items: &mut HashMap<String, Vec<OrderItem>>,
) -> Result<Order, RepositoryError> {
    let id: String = row.try_get("id")?;
    let customer_id: String = row.try_get("customer_id")?;
    let order_items = items.remove(&id).unwrap_or_default();

    Order::new(id.clone(), customer_id, order_items).map_err(|e| RepositoryError::InvalidRecord {
        entity: ENTITY,
        id,
        reason: e.to_string(),
    })
}

fn item_from_row(row: &SqliteRow, order_id: &str) -> Result<OrderItem, RepositoryError> {
    let invalid = |reason: String| RepositoryError::InvalidRecord {
        entity: ENTITY,
        id: order_id.to_string(),
        reason,
    };

    let quantity: i64 = row.try_get("quantity")?;
    let quantity = u32::try_from(quantity).map_err(|e| invalid(e.to_string()))?;
    if quantity == 0 {
        return Err(invalid("item with zero quantity".to_string()));
    }

    OrderItem::new(
        row.try_get::<String, _>("id")?,
        row.try_get::<String, _>("name")?,
        row.try_get::<f64, _>("unit_price")?,
        row.try_get::<String, _>("product_id")?,
        quantity,
    )
    .map_err(|e| invalid(e.to_string()))
}

// ============================================================================
// Unit Tests
// ============================================================================
