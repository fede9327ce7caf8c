//! Shared application state.

use crate::repository::UserRepository;

/// State shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Access to the `users` table.
    pub repo: UserRepository,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }
}
