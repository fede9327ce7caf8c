//! In-memory SQLite pools for tests that need more than one store.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// A fresh in-memory database. Capped at one connection so every
/// query sees the same memory store.
///
/// # Panics
///
/// Panics when the pool cannot be created; tests have no recovery path.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool")
}
