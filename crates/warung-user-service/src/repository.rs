//! SQLite-backed user repository.

use sqlx::SqlitePool;

use warung_core::error::ServiceError;

use crate::models::{User, ValidNewUser, ValidUpdateUser};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    phone TEXT NOT NULL,
    address TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Repository owning all access to the `users` table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
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

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            sqlx::query(
                "INSERT INTO users (name, email, phone, address) VALUES
                 ('John Doe', 'john@example.com', '081234567890', 'Jl. Sudirman No. 1, Jakarta'),
                 ('Jane Smith', 'jane@example.com', '081298765432', 'Jl. Thamrin No. 10, Jakarta')",
            )
            .execute(&self.pool)
            .await?;
            tracing::info!("seeded users table");
        }

        Ok(())
    }

    /// All users, ordered by id ascending.
    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// A single user, `None` when the row is absent.
    pub async fn find(&self, id: i64) -> Result<Option<User>, ServiceError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Insert a user and return the stored row, id and timestamp assigned.
    pub async fn create(&self, user: ValidNewUser) -> Result<User, ServiceError> {
        let created = sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, phone, address) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(user.name)
        .bind(user.email)
        .bind(user.phone)
        .bind(user.address)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    /// Apply the supplied fields, keeping stored values for omitted ones.
    /// Returns `None` when no row matched.
    pub async fn update(
        &self,
        id: i64,
        update: ValidUpdateUser,
    ) -> Result<Option<User>, ServiceError> {
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET
                name = COALESCE(?, name),
                email = COALESCE(?, email),
                phone = COALESCE(?, phone),
                address = COALESCE(?, address)
             WHERE id = ? RETURNING *",
        )
        .bind(update.name)
        .bind(update.email)
        .bind(update.phone)
        .bind(update.address)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(updated)
    }

    /// Delete a user. Returns `false` when no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
