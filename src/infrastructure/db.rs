use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

use crate::config::DatabaseConfig;

// ============================================================================
// Database - Pool and schema
// ============================================================================

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        street TEXT,
        number INTEGER,
        zipcode TEXT,
        city TEXT,
        active INTEGER NOT NULL DEFAULT 0,
        reward_points INTEGER NOT NULL DEFAULT 0
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        price REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        id TEXT PRIMARY KEY,
        customer_id TEXT NOT NULL REFERENCES customers(id),
        total REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS order_items (
        id TEXT PRIMARY KEY,
        order_id TEXT NOT NULL REFERENCES orders(id),
        product_id TEXT NOT NULL REFERENCES products(id),
        name TEXT NOT NULL,
        unit_price REAL NOT NULL,
        price REAL NOT NULL,
        quantity INTEGER NOT NULL
    )
    "#,
];

/// Open a connection pool for `config`.
///
/// In-memory databases live as long as their connection, so idle
/// connections are never reaped.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections.max(1))
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;

    tracing::info!(url = %config.url, "Connected to database");
    Ok(pool)
}

/// Create every table if it does not exist yet
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(tables = SCHEMA.len(), "Schema ready");
    Ok(())
}

/// In-memory database with the schema applied
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect(&DatabaseConfig::default()).await.unwrap();
    migrate(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_migrate_creates_tables() {
        let pool = test_pool().await;

        let rows = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(&pool)
            .await
            .unwrap();
        let tables: Vec<String> = rows.iter().map(|row| row.get("name")).collect();

        assert_eq!(tables, vec!["customers", "order_items", "orders", "products"]);
    }

    #[tokio::test]
    async fn test_migrate_is_idempotent() {
        let pool = test_pool().await;
        assert!(migrate(&pool).await.is_ok());
    }
}
