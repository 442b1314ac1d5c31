//! Pure field-level validation for create and update requests.
//!
//! Validators return a map from field name to messages; an empty map means
//! the request is valid. They never touch the store.

use regex::Regex;
use std::sync::LazyLock;

use crate::api::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::error::FieldErrors;

/// Compiled regex for email shape checks (`local@domain.tld`).
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

/// Validates a create request: first name, last name, and email are required
/// and non-blank; email must match the address shape.
pub fn validate_create(req: &CreateUserRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&req.first_name) {
        add_error(&mut errors, "FirstName", "First name is required.");
    }

    if is_blank(&req.last_name) {
        add_error(&mut errors, "LastName", "Last name is required.");
    }

    if is_blank(&req.email) {
        add_error(&mut errors, "Email", "Email is required.");
    } else if let Some(email) = &req.email
        && !EMAIL_REGEX.is_match(email.trim())
    {
        add_error(&mut errors, "Email", "Email must be a valid email address.");
    }

    errors
}

/// Validates an update request: only the email is checked, and only when it
/// is provided and non-blank. Blank text fields are a no-op override, so
/// they pass through unchecked.
pub fn validate_update(req: &UpdateUserRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(email) = &req.email
        && !email.trim().is_empty()
        && !EMAIL_REGEX.is_match(email.trim())
    {
        add_error(&mut errors, "Email", "Email must be a valid email address.");
    }

    errors
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}

fn add_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}
