//! Shared gateway state.

/// The gateway's entire state: one HTTP client and two backend URLs.
#[derive(Debug, Clone)]
pub struct GatewayState {
    /// Client for all proxied calls.
    pub http: reqwest::Client,
    /// Base URL of the User Service (no trailing slash).
    pub user_service_url: String,
    /// Base URL of the Order Service (no trailing slash).
    pub order_service_url: String,
}

impl GatewayState {
    /// Create new gateway state, normalizing trailing slashes.
    #[must_use]
    pub fn new(http: reqwest::Client, user_service_url: String, order_service_url: String) -> Self {
        Self {
            http,
            user_service_url: user_service_url.trim_end_matches('/').to_string(),
            order_service_url: order_service_url.trim_end_matches('/').to_string(),
        }
    }
}
