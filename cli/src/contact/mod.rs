//! # AssignMaker Contact Form
//!
//! File: cli/src/contact/mod.rs
//!
//! ## Overview
//!
//! Client side of the contact form: the form state with its touched flags
//! (`form`), the field rules (`validate`) and the single relay call made by a
//! submit (`submit`). The server side of the same exchange lives in
//! `commands::serve::handlers` and `mail`.
//!
//! ```rust
//! let mut form = ContactForm::new();
//! form.update_field(Field::Name, "Asha");
//! form.blur(Field::Name);
//! let transport = HttpContactTransport::new("http://localhost:5000")?;
//! form.submit(&transport).await?;
//! ```
//!
pub mod form;
pub mod submit;
pub mod validate;

pub use form::{ContactForm, ContactFormData, Field};
pub use submit::{Ack, HttpContactTransport, SubmitError};
