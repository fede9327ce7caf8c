//! Outbound HTTP client construction.

use std::time::Duration;

use crate::error::StartupError;

/// Bound applied to every outbound service-to-service call.
pub const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the client used for calls between services. Built once per
/// process and cloned into handler state.
///
/// # Errors
///
/// Returns [`StartupError::Config`] when the TLS backend cannot be
/// initialized.
pub fn client() -> Result<reqwest::Client, StartupError> {
    reqwest::Client::builder()
        .timeout(OUTBOUND_TIMEOUT)
        .build()
        .map_err(|e| StartupError::Config(format!("failed to build HTTP client: {e}")))
}
