//! Errors raised while talking to the GoBarber API.

use shared::api::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response
    #[error("Request failed: {0}")]
    Network(String),

    /// Request body could not be encoded
    #[error("Failed to serialize request: {0}")]
    Serialize(String),

    /// Response body was not what we expected
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Token missing, expired or rejected
    #[error("Session expired, sign in again")]
    Unauthorized,

    /// Any other non-2xx status
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    /// Map a failed status and its (optional) error body.
    pub fn from_status(status: u16, body: Option<ErrorResponse>) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }

        let message = body
            .map(|b| b.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Unexpected response".to_string());
        ApiError::Http { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status() {
        let err = ApiError::from_status(401, None);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_backend_message_is_kept() {
        let body = ErrorResponse {
            status: "error".to_string(),
            message: "E-mail address already used".to_string(),
        };
        let err = ApiError::from_status(400, Some(body));
        assert_eq!(
            err.to_string(),
            "HTTP error 400: E-mail address already used"
        );
    }

    #[test]
    fn test_missing_body() {
        assert_eq!(
            ApiError::from_status(500, None),
            ApiError::Http {
                status: 500,
                message: "Unexpected response".to_string(),
            }
        );
    }
}
