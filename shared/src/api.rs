use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Session, User};

// ============================================================================
// Session API Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Enter a valid email")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

pub type SignInResponse = Session;

// ============================================================================
// Account API Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Enter a valid email")
    )]
    pub email: String,

    #[validate(length(min = 6, message = "At least 6 characters"))]
    pub password: String,
}

pub type SignUpResponse = User;

// ============================================================================
// Password Recovery API Types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Enter a valid email")
    )]
    pub email: String,
}

/// Fields typed into the reset form, before the token is attached
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ResetPasswordForm {
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub password_confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
    pub password_confirmation: String,
    pub token: String,
}

impl ResetPasswordRequest {
    pub fn new(form: ResetPasswordForm, token: impl Into<String>) -> Self {
        Self {
            password: form.password,
            password_confirmation: form.password_confirmation,
            token: token.into(),
        }
    }
}

/// Query string of the link sent in the recovery email
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetPasswordQuery {
    pub token: Option<String>,
}

// ============================================================================
// Schedule API Types
// ============================================================================

/// Query for `/appointments/me`; `month` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentsQuery {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Query for `/providers/{id}/month-availability`; `month` is 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilityQuery {
    pub year: i32,
    pub month: u32,
}

// ============================================================================
// Error Types
// ============================================================================

/// Error body sent back by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_request_attaches_token() {
        let form = ResetPasswordForm {
            password: "secret".to_string(),
            password_confirmation: "secret".to_string(),
        };
        let request = ResetPasswordRequest::new(form, "abc123");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["token"], "abc123");
        assert_eq!(json["password_confirmation"], "secret");
    }

    #[test]
    fn test_error_response_without_status() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"message":"Incorrect email/password combination."}"#).unwrap();
        assert_eq!(body.message, "Incorrect email/password combination.");
        assert!(body.status.is_empty());
    }
}
