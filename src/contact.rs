//! Contact form intake and validation.
//!
//! A submission carries four required text fields. Each field is checked
//! independently and every failing field is reported, in field order, so the
//! client can annotate the whole form from a single response. Accepted
//! submissions are logged by the route handler and produce no durable side
//! effect.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Syntactic email check: one `@`, no whitespace, a dot in the domain.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A contact form submission. Fields default to empty so that an absent
/// field surfaces as a validation error rather than a deserialization
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl ContactSubmission {
    /// Validate all four fields.
    ///
    /// Returns `Ok(())` when every field passes, otherwise the full ordered
    /// list of per-field errors (name, email, subject, message). Checks are
    /// independent; one field per entry, first failing rule for that field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.chars().count() < 2 {
            errors.push(FieldError::new(
                "name",
                "Name must be at least 2 characters",
            ));
        }

        if !EMAIL_PATTERN.is_match(&self.email) {
            errors.push(FieldError::new("email", "Please provide a valid email"));
        }

        let subject = self.subject.trim();
        if subject.is_empty() {
            errors.push(FieldError::new("subject", "Subject is required"));
        } else if subject.chars().count() < 3 {
            errors.push(FieldError::new(
                "subject",
                "Subject must be at least 3 characters",
            ));
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(FieldError::new("message", "Message is required"));
        } else if message.chars().count() < 10 {
            errors.push(FieldError::new(
                "message",
                "Message must be at least 10 characters",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, subject: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        let sub = submission("Al", "a@b.com", "Hey there", "1234567890");
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_all_failing_fields_are_reported_in_order() {
        let sub = submission("A", "not-an-email", "", "short");
        let errors = sub.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
        assert_eq!(errors[1].field, "email");
        assert_eq!(errors[1].message, "Please provide a valid email");
        assert_eq!(errors[2].field, "subject");
        assert_eq!(errors[2].message, "Subject is required");
        assert_eq!(errors[3].field, "message");
        assert_eq!(errors[3].message, "Message must be at least 10 characters");
    }

    #[test]
    fn test_whitespace_only_name_is_required_error() {
        let sub = submission("   ", "a@b.com", "Subject", "a long enough message");
        let errors = sub.validate().unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "Name is required")]);
    }

    #[test]
    fn test_name_length_counts_trimmed_characters() {
        let sub = submission("  B  ", "a@b.com", "Subject", "a long enough message");
        let errors = sub.validate().unwrap_err();
        assert_eq!(errors[0].message, "Name must be at least 2 characters");
    }

    #[test]
    fn test_email_syntax() {
        let valid = ["a@b.com", "first.last@example.co.ke", "x+tag@host.io"];
        for email in valid {
            let sub = submission("Kelvin", email, "Subject", "a long enough message");
            assert!(sub.validate().is_ok(), "expected '{}' to pass", email);
        }

        let invalid = ["", "not-an-email", "a@b", "a b@c.com", "@host.com"];
        for email in invalid {
            let sub = submission("Kelvin", email, "Subject", "a long enough message");
            let errors = sub.validate().unwrap_err();
            assert_eq!(errors, vec![FieldError::new("email", "Please provide a valid email")]);
        }
    }

    #[test]
    fn test_message_boundary_length() {
        let sub = submission("Kelvin", "a@b.com", "Subject", "123456789");
        assert!(sub.validate().is_err());
        let sub = submission("Kelvin", "a@b.com", "Subject", "1234567890");
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let sub = submission("Al", "a@b.com", "Hey there", "1234567890");
        assert!(sub.validate().is_ok());
        assert!(sub.validate().is_ok());

        let bad = submission("A", "not-an-email", "", "short");
        assert_eq!(bad.validate().unwrap_err(), bad.validate().unwrap_err());
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let sub: ContactSubmission = serde_json::from_str(r#"{"name": "Kelvin"}"#).unwrap();
        assert_eq!(sub.email, "");
        let errors = sub.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
