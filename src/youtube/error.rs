//! Error taxonomy for YouTube Data API calls.
//!
//! Classifies failed calls into credential, quota, lookup, and transport
//! faults so callers can tell a bad key from an exhausted quota.

use reqwest::StatusCode;

use crate::youtube::models::ApiErrorEnvelope;

/// Failure modes of a Data API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The developer key was missing, malformed, or rejected.
    #[error("API key rejected: {0}")]
    Auth(String),

    /// The key's daily quota is exhausted. Not retryable until the quota
    /// resets or new credentials are supplied.
    #[error("API quota exceeded: {0}")]
    QuotaExceeded(String),

    /// A lookup by id came back with an empty item list.
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    /// The API answered 2xx but the payload did not have the expected shape.
    #[error("malformed API response: {0}")]
    Malformed(String),

    /// Any other non-success API response.
    #[error("YouTube API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// Transport-level failure (DNS, connect, timeout, TLS).
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a non-success API response.
    ///
    /// # Arguments
    /// * `status` - HTTP status of the response
    /// * `body` - Raw response body
    ///
    /// # Details
    /// The Data API reports failures as a JSON envelope
    /// `{"error": {"message": ..., "errors": [{"reason": ...}]}}`. The
    /// `reason` string is more precise than the status code (quota errors
    /// also arrive as 403), so it is consulted first. Bodies that are not
    /// valid envelopes are kept verbatim as the message.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let (message, reason) = match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => {
                let reason = envelope.error.errors.into_iter().find_map(|e| e.reason);
                (envelope.error.message, reason)
            }
            Err(_) => (body.trim().to_string(), None),
        };

        match reason.as_deref() {
            Some("keyInvalid" | "keyExpired") => return ApiError::Auth(message),
            Some("quotaExceeded" | "dailyLimitExceeded" | "rateLimitExceeded") => {
                return ApiError::QuotaExceeded(message);
            }
            _ => {}
        }

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(message),
            _ => ApiError::Api { status, message },
        }
    }

    /// Whether retrying the same call later could reasonably succeed.
    #[allow(dead_code)] // Lets callers with a retry policy tell transport faults apart
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Network(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_reason_maps_to_quota_exceeded() {
        let body = r#"{
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{"reason": "quotaExceeded", "domain": "youtube.quota"}]
            }
        }"#;

        let err = ApiError::from_response(StatusCode::FORBIDDEN, body);
        assert!(matches!(err, ApiError::QuotaExceeded(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_key_invalid_reason_maps_to_auth() {
        let body = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "errors": [{"reason": "keyInvalid"}]
            }
        }"#;

        let err = ApiError::from_response(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[test]
    fn test_bare_forbidden_maps_to_auth() {
        let err = ApiError::from_response(StatusCode::FORBIDDEN, "Forbidden");
        assert!(matches!(err, ApiError::Auth(_)));
    }

    #[test]
    fn test_other_status_maps_to_api() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "backend hiccup");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(message, "backend hiccup");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_not_found_display() {
        let err = ApiError::NotFound {
            kind: "video",
            id: "abc123".to_string(),
        };
        assert_eq!(err.to_string(), "video abc123 not found");
        assert!(!err.is_transient());
    }
}
