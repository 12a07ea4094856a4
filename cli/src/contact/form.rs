//! # Contact Form State
//!
//! File: cli/src/contact/form.rs
//!
//! ## Overview
//!
//! The contact form has four text fields (`name`, `email`, `contact`,
//! `service`). Next to the values it keeps a per-field *touched* flag, set when
//! the user leaves a field, and the per-field error currently shown.
//!
//! Errors are recomputed explicitly by [`validate`](super::validate::validate)
//! after every mutation, so at any time:
//!
//! `error(field)` is `Some` ⇔ `touched(field)` and the field's rule fails.
//!
//! Submission goes through [`ContactForm::begin_submit`] and
//! [`ContactForm::finish_submit`]; the async wrapper that performs the relay
//! call between them lives in `contact::submit`.
//!
use super::submit::{Ack, SubmitError, TransportError};
use super::validate::{validate, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// One of the four form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Contact,
    Service,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Contact, Field::Service];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Contact => "contact",
            Field::Service => "service",
        };
        f.write_str(name)
    }
}

/// A value kept for each of the four fields.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerField<T> {
    pub name: T,
    pub email: T,
    pub contact: T,
    pub service: T,
}

impl<T> PerField<T> {
    pub fn get(&self, field: Field) -> &T {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
            Field::Service => &self.service,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Contact => &mut self.contact,
            Field::Service => &mut self.service,
        }
    }
}

impl<T: Clone> PerField<T> {
    /// The same value for every field.
    pub fn splat(value: T) -> Self {
        Self {
            name: value.clone(),
            email: value.clone(),
            contact: value.clone(),
            service: value,
        }
    }
}

/// Touched flag per field.
pub type Touched = PerField<bool>;

/// Error currently surfaced per field.
pub type FieldErrors = PerField<Option<ValidationError>>;

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Surfaced errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|err| (f, err)))
    }

    /// All messages joined on one line, for logs and error displays.
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(_, err)| err.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The four submitted values. This is also the JSON body of `POST /api/contact`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub contact: String,
    pub service: String,
}

impl ContactFormData {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Contact => &self.contact,
            Field::Service => &self.service,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Contact => &mut self.contact,
            Field::Service => &mut self.service,
        }
    }
}

/// # Contact Form (`ContactForm`)
///
/// State of one contact form instance: values, touched flags, surfaced errors
/// and the in-flight flag that blocks a second submit while the relay call is
/// outstanding.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    values: ContactFormData,
    touched: Touched,
    errors: FieldErrors,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactFormData {
        &self.values
    }

    #[allow(dead_code)] // Widget state; the terminal host blurs every field itself.
    pub fn touched(&self, field: Field) -> bool {
        *self.touched.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<ValidationError> {
        *self.errors.get(field)
    }

    #[allow(dead_code)] // Widget state; the terminal host awaits each submit.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Keystroke: replaces the field's value and re-validates.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.values.value_mut(field) = value.into();
        self.revalidate();
    }

    /// Blur: marks the field touched and re-validates.
    pub fn blur(&mut self, field: Field) {
        *self.touched.get_mut(field) = true;
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values, &self.touched);
    }

    fn reset(&mut self) {
        self.values = ContactFormData::default();
        self.touched = Touched::default();
        self.revalidate();
    }

    /// # Begin Submit (`begin_submit`)
    ///
    /// Marks every field touched and re-validates. If any field fails, the
    /// submit is blocked and the values are kept. Otherwise the form enters the
    /// in-flight state and a snapshot of the values to send is returned.
    ///
    /// ## Errors
    ///
    /// * `SubmitError::InFlight` if a previous submission has not finished.
    /// * `SubmitError::Validation` with the surfaced errors if any field is invalid.
    pub fn begin_submit(&mut self) -> Result<ContactFormData, SubmitError> {
        if self.submitting {
            warn!("Submit ignored: a submission is already in progress");
            return Err(SubmitError::InFlight);
        }

        self.touched = Touched::splat(true);
        self.revalidate();

        if !self.errors.is_clean() {
            debug!("Submit blocked by validation: {}", self.errors.summary());
            return Err(SubmitError::Validation(self.errors.clone()));
        }

        self.submitting = true;
        Ok(self.values.clone())
    }

    /// # Finish Submit (`finish_submit`)
    ///
    /// Applies the relay's outcome. A successful acknowledgment resets the
    /// values and touched flags; anything else leaves the form as it was.
    /// Either way the in-flight state is cleared.
    pub fn finish_submit(
        &mut self,
        outcome: Result<Ack, TransportError>,
    ) -> Result<Ack, SubmitError> {
        self.submitting = false;

        match outcome {
            Ok(ack) if ack.success => {
                info!("Contact form sent: {}", ack.message);
                self.reset();
                Ok(ack)
            }
            Ok(ack) => {
                warn!("Contact endpoint rejected the submission: {}", ack.message);
                Err(SubmitError::Rejected(ack.message))
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                Err(SubmitError::Transport(e))
            }
        }
    }

    /// Leaves the in-flight state without an outcome, keeping values and
    /// touched flags. Used when a submit is cancelled mid-call.
    pub(super) fn abandon_submit(&mut self) {
        if self.submitting {
            warn!("Contact submission abandoned before the relay answered");
            self.submitting = false;
        }
    }
}
