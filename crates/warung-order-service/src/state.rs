//! Shared application state.

use crate::client::UserServiceClient;
use crate::repository::OrderRepository;

/// State shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Access to the `orders` table.
    pub repo: OrderRepository,
    /// Client for the composite read's user fetch.
    pub users: UserServiceClient,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(repo: OrderRepository, users: UserServiceClient) -> Self {
        Self { repo, users }
    }
}
