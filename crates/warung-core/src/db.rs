//! SQLite pool construction.
//!
//! Each service owns exactly one database file for the life of the
//! process. The file and its parent directory are created on first start.

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::StartupError;

/// Open (creating if absent) the SQLite database at `path`.
///
/// # Errors
///
/// Returns [`StartupError`] when the parent directory cannot be created
/// or the pool cannot connect.
pub async fn connect(path: &str) -> Result<SqlitePool, StartupError> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!(path, "connected to SQLite database");
    Ok(pool)
}
