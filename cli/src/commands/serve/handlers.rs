//! # Contact Endpoint Handler
//!
//! File: cli/src/commands/serve/handlers.rs
//!
//! ## Overview
//!
//! `POST /api/contact` receives `{ name, email, contact, service }`, composes
//! the operator email and hands it to the mail relay. Every answer carries the
//! `{ success, message }` envelope:
//!
//! | Outcome                         | Status | message                        |
//! |---------------------------------|--------|--------------------------------|
//! | Mail accepted by the relay      | 200    | `Message sent successfully!`   |
//! | Relay failed                    | 500    | `Failed to send message`       |
//! | Body not JSON / fields invalid  | 400    | reason                         |
//!
//! Relay failures are logged here and never described to the caller.
//!
use crate::contact::validate::check_all;
use crate::contact::{Ack, ContactFormData};
use crate::mail::{ContactEmail, MailRelay};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tracing::{error, info, warn};

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message";

/// Shared, read-only state of the contact route.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn MailRelay>,
    pub operator_address: Arc<str>,
}

impl AppState {
    pub fn new(relay: Arc<dyn MailRelay>, operator_address: &str) -> Self {
        Self {
            relay,
            operator_address: Arc::from(operator_address),
        }
    }
}

/// # Submit Contact (`submit_contact`)
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactFormData>, JsonRejection>,
) -> (StatusCode, Json<Ack>) {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            let reason = rejection.body_text();
            warn!("Rejected contact request: {}", reason);
            return (StatusCode::BAD_REQUEST, Json(Ack::failed(reason)));
        }
    };

    let errors = check_all(&submission);
    if !errors.is_clean() {
        let reason = errors.summary();
        warn!("Rejected invalid contact submission: {}", reason);
        return (StatusCode::BAD_REQUEST, Json(Ack::failed(reason)));
    }

    let email = ContactEmail::compose(&submission, &state.operator_address);
    match state.relay.dispatch(&email).await {
        Ok(()) => {
            info!("Contact message from {} delivered", submission.email);
            (StatusCode::OK, Json(Ack::ok(SENT_MESSAGE)))
        }
        Err(e) => {
            error!("Email sending error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(Ack::failed(FAILED_MESSAGE)),
            )
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::contact::submit::CONTACT_PATH;
    use crate::mail::relay::MailDispatchError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request};
    use axum::routing::post;
    use axum::Router;
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Relay double: records emails, optionally failing every dispatch.
    #[derive(Default)]
    pub(crate) struct RecordingRelay {
        pub sent: Mutex<Vec<ContactEmail>>,
        pub fail: bool,
    }

    #[async_trait]
    impl MailRelay for RecordingRelay {
        async fn dispatch(&self, email: &ContactEmail) -> Result<(), MailDispatchError> {
            if self.fail {
                return Err(MailDispatchError::Transport("535 authentication failed".into()));
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn app(relay: Arc<RecordingRelay>) -> Router {
        Router::new()
            .route(CONTACT_PATH, post(submit_contact))
            .with_state(AppState::new(relay, "ops@example.com"))
    }

    fn json_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(CONTACT_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_ack(response: axum::response::Response) -> Ack {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_body() -> String {
        serde_json::json!({
            "name": "Asha",
            "email": "asha@example.com",
            "contact": "9876543210",
            "service": "Essay",
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_delivers_and_answers_200() {
        let relay = Arc::new(RecordingRelay::default());

        let response = app(relay.clone())
            .oneshot(json_request(&valid_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_ack(response).await, Ack::ok(SENT_MESSAGE));

        let sent = relay.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, "asha@example.com");
        assert_eq!(sent[0].to, "ops@example.com");
        assert_eq!(sent[0].subject, "New Form Submission");
        assert!(sent[0].body.contains("Service Needed: Essay"));
    }

    #[tokio::test]
    async fn test_relay_failure_answers_500_with_generic_message() {
        let relay = Arc::new(RecordingRelay {
            fail: true,
            ..RecordingRelay::default()
        });

        let response = app(relay)
            .oneshot(json_request(&valid_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let ack = read_ack(response).await;
        assert_eq!(ack, Ack::failed(FAILED_MESSAGE));
        assert!(!ack.message.contains("535"));
    }

    #[tokio::test]
    async fn test_malformed_json_answers_400_envelope() {
        let relay = Arc::new(RecordingRelay::default());

        let response = app(relay.clone())
            .oneshot(json_request(r#"{"name":"Asha"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!read_ack(response).await.success);
        assert!(relay.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_fields_answer_400_without_dispatch() {
        let relay = Arc::new(RecordingRelay::default());
        let body = r#"{"name":"Asha","email":"asha@example","contact":"98765","service":"Essay"}"#;

        let response = app(relay.clone())
            .oneshot(json_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let ack = read_ack(response).await;
        assert_eq!(
            ack.message,
            "Please enter a valid email address. Please enter a valid 10-digit contact number."
        );
        assert!(relay.sent.lock().unwrap().is_empty());
    }
}
