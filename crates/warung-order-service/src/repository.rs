//! SQLite-backed order repository.

use sqlx::SqlitePool;

use warung_core::error::ServiceError;

use crate::models::{OrderRow, ValidNewOrder, ValidUpdateOrder};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL,
    restaurant_name TEXT NOT NULL,
    items TEXT NOT NULL,
    total_price INTEGER NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Repository owning all access to the `orders` table.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the table if absent and seed two rows when it is empty.
    /// Idempotent across restarts.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`sqlx::Error`] on schema or seed failure.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            sqlx::query(
                "INSERT INTO orders (user_id, restaurant_name, items, total_price, status) VALUES
                 (1, 'Nasi Goreng Kebon Sirih',
                  '[\"Nasi Goreng Kambing\",\"Es Teh Manis\"]', 58000, 'pending'),
                 (2, 'Sate Khas Senayan',
                  '[\"Sate Ayam\",\"Lontong\",\"Es Jeruk\"]', 75000, 'pending')",
            )
            .execute(&self.pool)
            .await?;
            tracing::info!("seeded orders table");
        }

        Ok(())
    }

    /// All orders, newest id first, optionally filtered by user.
    pub async fn list(&self, user_id: Option<i64>) -> Result<Vec<OrderRow>, ServiceError> {
        let rows = match user_id {
            Some(uid) => {
                sqlx::query_as::<_, OrderRow>(
                    "SELECT * FROM orders WHERE user_id = ? ORDER BY id DESC",
                )
                .bind(uid)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, OrderRow>("SELECT * FROM orders ORDER BY id DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// A single order, `None` when the row is absent.
    pub async fn find(&self, id: i64) -> Result<Option<OrderRow>, ServiceError> {
        let row = sqlx::query_as::<_, OrderRow>("SELECT * FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Insert an order as `pending` and return the stored row.
    pub async fn create(&self, order: ValidNewOrder) -> Result<OrderRow, ServiceError> {
        let items = serde_json::to_string(&order.items)
            .map_err(|e| ServiceError::Internal(format!("failed to encode items: {e}")))?;
        let created = sqlx::query_as::<_, OrderRow>(
            "INSERT INTO orders (user_id, restaurant_name, items, total_price, status)
             VALUES (?, ?, ?, ?, 'pending') RETURNING *",
        )
        .bind(order.user_id)
        .bind(order.restaurant_name)
        .bind(items)
        .bind(order.total_price)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Apply the supplied fields, keeping stored values for omitted ones.
    /// Returns `None` when no row matched.
    pub async fn update(
        &self,
        id: i64,
        update: ValidUpdateOrder,
    ) -> Result<Option<OrderRow>, ServiceError> {
        let items = update
            .items
            .map(|items| serde_json::to_string(&items))
            .transpose()
            .map_err(|e| ServiceError::Internal(format!("failed to encode items: {e}")))?;
        let updated = sqlx::query_as::<_, OrderRow>(
            "UPDATE orders SET
                status = COALESCE(?, status),
                restaurant_name = COALESCE(?, restaurant_name),
                items = COALESCE(?, items),
                total_price = COALESCE(?, total_price)
             WHERE id = ? RETURNING *",
        )
        .bind(update.status)
        .bind(update.restaurant_name)
        .bind(items)
        .bind(update.total_price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    /// Delete an order. Returns `false` when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
