//! Form validation helpers.
//!
//! Request types derive `validator::Validate`; this module flattens the
//! resulting errors into one message per field so pages can show them next
//! to their inputs.

use std::collections::BTreeMap;

use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Why a form could not be submitted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more fields failed their rules
    #[error("{} invalid field(s)", .0.len())]
    Fields(FormErrors),

    /// The reset link did not carry a token
    #[error("Reset token missing from the recovery link")]
    MissingResetToken,
}

/// Field name to the first message reported for it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<&ValidationErrors> for FormErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut form_errors = FormErrors::new();
        for (field, field_errors) in errors.field_errors() {
            if let Some(first) = field_errors.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                form_errors.insert(field, message);
            }
        }
        form_errors
    }
}

/// Validate every field of a form and collect the failures.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), ValidationError> {
    form.validate().map_err(|errors| {
        let form_errors = FormErrors::from(&errors);
        tracing::debug!("Form rejected: {:?}", form_errors);
        ValidationError::Fields(form_errors)
    })
}

/// Pull a usable token out of the recovery link query.
pub fn require_reset_token(token: Option<&str>) -> Result<String, ValidationError> {
    match token.map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(ValidationError::MissingResetToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ForgotPasswordRequest, ResetPasswordForm, SignInRequest, SignUpRequest};

    fn field_errors<T: Validate>(form: &T) -> FormErrors {
        match validate_form(form) {
            Err(ValidationError::Fields(errors)) => errors,
            other => panic!("expected field errors, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_sign_up() {
        let form = SignUpRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "123456".to_string(),
        };
        assert_eq!(validate_form(&form), Ok(()));
    }

    #[test]
    fn test_sign_up_reports_every_field() {
        let form = SignUpRequest {
            name: String::new(),
            email: "not-an-email".to_string(),
            password: "123".to_string(),
        };
        let errors = field_errors(&form);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Enter a valid email"));
        assert_eq!(errors.get("password"), Some("At least 6 characters"));
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let errors = field_errors(&SignInRequest::default());
        assert!(errors.get("email").is_some());
        assert_eq!(errors.get("password"), Some("Password is required"));
    }

    #[test]
    fn test_forgot_password_rejects_bad_email() {
        let form = ForgotPasswordRequest {
            email: "ana@".to_string(),
        };
        let errors = field_errors(&form);
        assert_eq!(errors.get("email"), Some("Enter a valid email"));
    }

    #[test]
    fn test_reset_password_confirmation_must_match() {
        let form = ResetPasswordForm {
            password: "secret".to_string(),
            password_confirmation: "secreT".to_string(),
        };
        let errors = field_errors(&form);
        assert_eq!(errors.get("password"), None);
        assert_eq!(
            errors.get("password_confirmation"),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FormErrors::new();
        errors.insert("email", "first");
        errors.insert("email", "second");
        assert_eq!(errors.get("email"), Some("first"));
    }

    #[test]
    fn test_require_reset_token() {
        assert_eq!(require_reset_token(Some("abc")), Ok("abc".to_string()));
        assert_eq!(
            require_reset_token(Some("  ")),
            Err(ValidationError::MissingResetToken)
        );
        assert_eq!(
            require_reset_token(None),
            Err(ValidationError::MissingResetToken)
        );
    }
}
