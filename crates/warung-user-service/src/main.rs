//! Warung User Service entry point.

use std::error::Error;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use warung_user_service::repository::UserRepository;
use warung_user_service::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Warung User Service");

    let port = warung_core::config::port(3001)?;
    let db_path = warung_core::config::env_or("DB_PATH", "./database/users.db");

    let pool = warung_core::db::connect(&db_path).await?;
    let repo = UserRepository::new(pool.clone());
    repo.init().await?;

    let app = warung_user_service::app(AppState::new(repo));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(warung_core::shutdown::signal())
        .await?;

    // Close the store handle before exit.
    pool.close().await;

    Ok(())
}
