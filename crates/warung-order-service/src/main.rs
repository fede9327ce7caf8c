//! Warung Order Service entry point.

use std::error::Error;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use warung_order_service::client::UserServiceClient;
use warung_order_service::repository::OrderRepository;
use warung_order_service::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Warung Order Service");

    let port = warung_core::config::port(3002)?;
    let db_path = warung_core::config::env_or("DB_PATH", "./database/orders.db");
    let user_service_url =
        warung_core::config::env_or("USER_SERVICE_URL", "http://localhost:3001");

    let pool = warung_core::db::connect(&db_path).await?;
    let repo = OrderRepository::new(pool.clone());
    repo.init().await?;

    let users = UserServiceClient::new(warung_core::http::client()?, user_service_url);
    let app = warung_order_service::app(AppState::new(repo, users));

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
