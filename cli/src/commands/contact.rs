//! # AssignMaker Contact Command
//!
//! File: cli/src/commands/contact.rs
//!
//! ## Overview
//!
//! Hosts one contact form on the terminal: the four fields come from flags,
//! each is blurred as if the visitor tabbed through the form, and the form is
//! submitted once to the site's relay endpoint. The outcome is reported with
//! the same wording as the website's alerts.
//!
//! ## Examples
//!
//! ```bash
//! assignmaker contact --name "Asha" --email asha@example.com \
//!     --contact 9876543210 --service "Statistics homework" \
//!     --api-url https://assignmentmaker.example
//! ```
//!
use crate::contact::{ContactForm, Field, HttpContactTransport, SubmitError};
use crate::core::error::{Result, SiteError};
use clap::Parser;
use tracing::debug;

pub const SENT_ALERT: &str = "Message sent successfully!";
pub const REJECTED_ALERT: &str = "Something went wrong. Please try again.";
pub const FAILED_ALERT: &str = "Failed to send message.";

/// # Contact Command Arguments (`ContactArgs`)
#[derive(Parser, Debug)]
pub struct ContactArgs {
    /// Your name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Your email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// 10-digit contact number.
    #[arg(long, default_value = "")]
    pub contact: String,

    /// The service you need.
    #[arg(long, default_value = "")]
    pub service: String,

    /// Base URL of the site running `assignmaker serve`.
    #[arg(long, env = "ASSIGNMAKER_API_URL", default_value = "http://localhost:5000")]
    pub api_url: String,
}

impl ContactArgs {
    /// Fills a fresh form the way a visitor would: type, then leave each field.
    fn fill_form(&self) -> ContactForm {
        let mut form = ContactForm::new();
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Contact, &self.contact),
            (Field::Service, &self.service),
        ] {
            form.update_field(field, value.as_str());
            form.blur(field);
        }
        form
    }
}

/// # Handle Contact Command (`handle_contact`)
///
/// ## Errors
///
/// Returns an error (exit status 1) when validation blocks the submit or the
/// relay does not confirm delivery.
pub async fn handle_contact(args: ContactArgs) -> Result<()> {
    let mut form = args.fill_form();
    let transport = HttpContactTransport::new(&args.api_url).map_err(SiteError::from)?;
    debug!("Contact endpoint: {}", transport.endpoint());
    debug!("Form values: {:?}", form.values());

    match form.submit(&transport).await {
        Ok(_) => {
            println!("{}", SENT_ALERT);
            Ok(())
        }
        Err(SubmitError::Validation(_)) => {
            for field in Field::ALL {
                if let Some(err) = form.error(field) {
                    eprintln!("{}: {}", field, err);
                }
            }
            Err(SiteError::Validation(form.errors().summary()).into())
        }
        Err(e @ SubmitError::Rejected(_)) => {
            eprintln!("{}", REJECTED_ALERT);
            Err(SiteError::from(e).into())
        }
        Err(e) => {
            eprintln!("{}", FAILED_ALERT);
            Err(SiteError::from(e).into())
        }
    }
}
