//! # Contact Form Validation
//!
//! File: cli/src/contact/validate.rs
//!
//! ## Overview
//!
//! Field rules for the contact form. Each rule looks at one field only:
//!
//! - `name`: must not be blank after trimming
//! - `email`: `something@something.something` with no whitespace and a single `@`
//!   (a shape check, not RFC 5322 validation)
//! - `contact`: exactly ten ASCII digits, no `+` and no separators
//! - `service`: must not be blank after trimming
//!
//! [`validate`] combines the rules with the touched flags to produce the
//! errors the form shows. The mail relay reuses [`check_all`] to reject
//! malformed bodies before any mail is composed.
//!
use super::form::{ContactFormData, Field, FieldErrors, Touched};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Why a field failed its rule. The messages are the ones shown under the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required.")]
    MissingName,

    #[error("Please enter a valid email address.")]
    MalformedEmail,

    #[error("Please enter a valid 10-digit contact number.")]
    MalformedContact,

    #[error("Please describe the service you need.")]
    MissingService,
}

pub fn is_valid_name(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_contact(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_service(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Runs the rule for `field` against `value`.
pub fn check_field(field: Field, value: &str) -> Result<(), ValidationError> {
    let (ok, err) = match field {
        Field::Name => (is_valid_name(value), ValidationError::MissingName),
        Field::Email => (is_valid_email(value), ValidationError::MalformedEmail),
        Field::Contact => (is_valid_contact(value), ValidationError::MalformedContact),
        Field::Service => (is_valid_service(value), ValidationError::MissingService),
    };
    if ok {
        Ok(())
    } else {
        Err(err)
    }
}

/// # Validate (`validate`)
///
/// Errors to surface for `data` given the `touched` flags. A field gets an
/// error only when it has been touched and its rule fails.
pub fn validate(data: &ContactFormData, touched: &Touched) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if *touched.get(field) {
            *errors.get_mut(field) = check_field(field, data.value(field)).err();
        }
    }
    errors
}

/// Every rule, regardless of touched state.
pub fn check_all(data: &ContactFormData) -> FieldErrors {
    validate(data, &Touched::splat(true))
}
