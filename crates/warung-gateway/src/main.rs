//! Warung API Gateway entry point.

use std::error::Error;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use warung_gateway::state::GatewayState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Warung API Gateway");

    let port = warung_core::config::port(3000)?;
    let user_service_url =
        warung_core::config::env_or("USER_SERVICE_URL", "http://localhost:3001");
    let order_service_url =
        warung_core::config::env_or("ORDER_SERVICE_URL", "http://localhost:3002");

    let state = GatewayState::new(
        warung_core::http::client()?,
        user_service_url,
        order_service_url,
    );
    let app = warung_gateway::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(warung_core::shutdown::signal())
        .await?;

    Ok(())
}
