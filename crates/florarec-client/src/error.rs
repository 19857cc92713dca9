use crate::wire::ErrorBody;
use std::fmt;

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Failures crossing the recommendation-service boundary.
///
/// The orchestrator stores `to_string()` of these verbatim in its error
/// slot, so `Display` for a service-reported failure yields exactly the
/// user-facing message with no prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service could not be reached at the transport level.
    Transport(String),

    /// The service answered with a non-success status. `message` is the
    /// structured `detail` field when present, otherwise the raw body text,
    /// otherwise a generic status-coded message.
    Service { status: u16, message: String },

    /// The response body arrived but could not be parsed into the expected
    /// shape.
    Malformed(String),
}

impl GatewayError {
    /// Build a service error from a non-success status and its body text.
    pub fn from_failure_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.detail.filter(|detail| !detail.is_empty()),
            Err(_) => {
                let text = body.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
        }
        .unwrap_or_else(|| format!("service error (status {})", status));

        GatewayError::Service { status, message }
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Transport(msg) => {
                write!(f, "recommendation service unreachable: {}", msg)
            }
            GatewayError::Service { message, .. } => write!(f, "{}", message),
            GatewayError::Malformed(msg) => {
                write!(f, "unexpected response from recommendation service: {}", msg)
            }
        }
    }
}

impl std::error::Error for GatewayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_body_with_detail() {
        let err = GatewayError::from_failure_body(422, r#"{"detail":"no matching soil profile"}"#);
        assert_eq!(
            err,
            GatewayError::Service {
                status: 422,
                message: "no matching soil profile".to_string(),
            }
        );
        assert_eq!(err.to_string(), "no matching soil profile");
    }

    #[test]
    fn test_failure_body_parseable_without_detail_uses_generic_message() {
        let err = GatewayError::from_failure_body(500, "{}");
        assert_eq!(err.to_string(), "service error (status 500)");
    }

    #[test]
    fn test_failure_body_with_empty_detail_uses_generic_message() {
        let err = GatewayError::from_failure_body(500, r#"{"detail":""}"#);
        assert_eq!(err.to_string(), "service error (status 500)");
    }

    #[test]
    fn test_unparseable_failure_body_falls_back_to_raw_text() {
        let err = GatewayError::from_failure_body(502, "bad gateway upstream");
        assert_eq!(err.to_string(), "bad gateway upstream");
    }

    #[test]
    fn test_empty_failure_body_uses_generic_message() {
        let err = GatewayError::from_failure_body(503, "");
        assert_eq!(err.to_string(), "service error (status 503)");
    }

    #[test]
    fn test_transport_and_malformed_messages_are_prefixed() {
        let transport = GatewayError::Transport("connection refused".to_string());
        assert!(transport.to_string().contains("unreachable"));

        let malformed = GatewayError::Malformed("missing field `score`".to_string());
        assert!(malformed.to_string().contains("unexpected response"));
    }
}
