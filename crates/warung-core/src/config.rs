//! Environment-variable configuration helpers.

use crate::error::StartupError;

/// Read an environment variable, falling back to `default` when unset.
#[must_use]
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read `PORT`, falling back to the service default.
///
/// # Errors
///
/// Returns [`StartupError::Config`] when the variable is set but not a
/// valid port number.
pub fn port(default: u16) -> Result<u16, StartupError> {
    match std::env::var("PORT") {
        Ok(raw) => raw
            .parse()
            .map_err(|e| StartupError::Config(format!("PORT must be a valid u16: {e}"))),
        Err(_) => Ok(default),
    }
}
