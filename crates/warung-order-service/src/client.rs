//! Outbound client for the User Service.

use serde::Deserialize;

use warung_core::error::ServiceError;

/// The slice of the User Service envelope the composite read needs.
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    success: bool,
    data: Option<serde_json::Value>,
}

/// HTTP client for `GET {USER_SERVICE_URL}/users/{id}`.
#[derive(Debug, Clone)]
pub struct UserServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserServiceClient {
    /// Build a client against the given base URL (no trailing slash).
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Fetch one user's external representation.
    ///
    /// Any failure — connect error, timeout, non-2xx status, or a body
    /// that is not a `{success, data}` envelope — is reported as the
    /// same upstream error; the composite read has no fallback.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Upstream`] naming the user fetch.
    pub async fn fetch_user(&self, user_id: i64) -> Result<serde_json::Value, ServiceError> {
        let url = format!("{}/users/{user_id}", self.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| upstream(user_id, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(upstream(
                user_id,
                format!("User Service responded with status {status}"),
            ));
        }

        let envelope: UserEnvelope = response
            .json()
            .await
            .map_err(|e| upstream(user_id, e.to_string()))?;

        match envelope {
            UserEnvelope {
                success: true,
                data: Some(user),
            } => Ok(user),
            _ => Err(upstream(user_id, "malformed User Service envelope".into())),
        }
    }
}

fn upstream(user_id: i64, detail: String) -> ServiceError {
    ServiceError::Upstream {
        context: format!("failed to fetch user {user_id} from User Service"),
        detail,
    }
}
