//! JSON response envelopes shared by all three services.
//!
//! Every response carries `success`; successful ones carry `data` (or a
//! `message` for deletions), failures carry `message` and optionally the
//! underlying error string.

use serde::Serialize;

/// Successful response wrapping a payload.
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    /// Always `true`.
    pub success: bool,
    /// The payload.
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Wrap a payload in a success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Successful response carrying only a human-readable message (deletions).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Always `true`.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a confirmation message in a success envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable description of what failed.
    pub message: String,
    /// Underlying error text, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Build a failure envelope.
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_response_serializes_success_flag() {
        let json = serde_json::to_value(DataResponse::new(vec![1, 2])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_error_response_omits_absent_error_field() {
        let json = serde_json::to_value(ErrorResponse::new("nope", None)).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_response_carries_error_string() {
        let json =
            serde_json::to_value(ErrorResponse::new("nope", Some("UNIQUE constraint".into())))
                .unwrap();
        assert_eq!(json["error"], "UNIQUE constraint");
    }
}
