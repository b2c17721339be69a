//! Shared setup for the router integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use questfolio::{
    AppState, Config,
    config::{EmailConfig, LoggingConfig, ServerConfig},
};
use questfolio_contact::{MailError, MailMessage, Mailer, Relay};
use tower::ServiceExt;

/// Records every message it is asked to send and can fail on the n-th attempt.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<MailMessage>>,
    attempts: Mutex<usize>,
    fail_on: Option<usize>,
}

impl RecordingMailer {
    pub fn failing_on(attempt: usize) -> Self {
        Self {
            fail_on: Some(attempt),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let attempt = {
            let mut attempts = self.attempts.lock().unwrap();
            *attempts += 1;
            *attempts
        };

        if self.fail_on == Some(attempt) {
            return Err(MailError::Rejected("550 mailbox unavailable".to_string()));
        }

        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            from_address: "portfolio@example.com".to_string(),
            owner_address: "owner@example.com".to_string(),
            owner_name: "Owner".to_string(),
            ..Default::default()
        },
        logging: LoggingConfig::default(),
    }
}

pub fn test_app(mailer: Arc<RecordingMailer>) -> Router {
    let config = test_config();
    let relay = Relay::new(mailer, config.email.relay_config());

    questfolio::router(AppState { relay }).layer(axum::middleware::from_fn(
        questfolio::middleware::cache_control_middleware,
    ))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
