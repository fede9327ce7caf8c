//! Ephemeral HTTP listeners for tests that exercise real sockets.

use std::net::SocketAddr;

use axum::Router;

/// Serve `router` on an ephemeral localhost port. The server runs until
/// the test process exits; tests address it via the returned base URL.
///
/// # Panics
///
/// Panics when the listener cannot bind; tests have no recovery path.
pub async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr: SocketAddr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    format!("http://{addr}")
}
