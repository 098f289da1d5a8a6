use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::domain::customer::{Address, Customer, CustomerError};
use crate::domain::shared::{Repository, RepositoryError};

// ============================================================================
// Customer Repository
// ============================================================================
//
// One row per customer. The address is flattened into nullable columns;
// a customer without address has all four NULL.
//
// ============================================================================

const ENTITY: &str = "Customer";

#[derive(Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Customer> for CustomerRepository {
    async fn create(&self, entity: &Customer) -> Result<(), RepositoryError> {
        let address = entity.address();

        sqlx::query(
            "INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(entity.id())
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(|a| i64::from(a.number())))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(i64::from(entity.reward_points()))
        .execute(&self.pool)
        .await?;

        tracing::debug!(customer_id = %entity.id(), "Inserted customer row");
        Ok(())
    }

    async fn update(&self, entity: &Customer) -> Result<(), RepositoryError> {
        let address = entity.address();

        let result = sqlx::query(
            "UPDATE customers
             SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
             WHERE id = ?",
        )
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(|a| i64::from(a.number())))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(i64::from(entity.reward_points()))
        .bind(entity.id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: ENTITY,
                id: entity.id().to_string(),
            });
        }
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Customer, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, street, number, zipcode, city, active, reward_points
             FROM customers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::NotFound {
            entity: ENTITY,
            id: id.to_string(),
        })?;

        customer_from_row(&row)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, name, street, number, zipcode, city, active, reward_points
             FROM customers ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(customer_from_row).collect()
    }
}

fn customer_from_row(row: &SqliteRow) -> Result<Customer, RepositoryError> {
    let id: String = row.try_get("id")?;
    let invalid = |reason: String| RepositoryError::InvalidRecord {
        entity: ENTITY,
        id: id.clone(),
        reason,
    };

    let street: Option<String> = row.try_get("street")?;
    let number: Option<i64> = row.try_get("number")?;
    let zipcode: Option<String> = row.try_get("zipcode")?;
    let city: Option<String> = row.try_get("city")?;

    let address = match (street, number, zipcode, city) {
        (Some(street), Some(number), Some(zipcode), Some(city)) => {
            let number = u32::try_from(number).map_err(|e| invalid(e.to_string()))?;
            Some(Address::new(street, number, zipcode, city).map_err(|e| invalid(e.to_string()))?)
        }
        (None, None, None, None) => None,
        _ => return Err(invalid("partial address".to_string())),
    };

    let reward_points: i64 = row.try_get("reward_points")?;
    let reward_points = u32::try_from(reward_points).map_err(|e| invalid(e.to_string()))?;

    Customer::restore(
        id.clone(),
        row.try_get::<String, _>("name")?,
        address,
        row.try_get("active")?,
        reward_points,
    )
    .map_err(|e: CustomerError| invalid(e.to_string()))
}

// ============================================================================
// Unit Tests
// ============================================================================
