use std::sync::Arc;

use tracing::info;

use crate::{ContactRequest, Mailer, RelayConfig, RelayError};

/// Validates a contact request and forwards it by email: first the
/// notification to the owner, then the acknowledgement to the sender.
#[derive(Clone)]
pub struct Relay {
    mailer: Arc<dyn Mailer>,
    config: RelayConfig,
}

impl Relay {
    pub fn new(mailer: Arc<dyn Mailer>, config: RelayConfig) -> Self {
        Self { mailer, config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    pub async fn relay(&self, request: ContactRequest) -> Result<(), RelayError> {
        let submission = request.into_submission()?;

        let notification = self.config.notification(&submission)?;
        let acknowledgement = self.config.acknowledgement(&submission)?;

        self.mailer
            .send(&notification)
            .await
            .map_err(RelayError::Notification)?;

        info!(
            name = %submission.name,
            subject = %submission.subject,
            "Contact notification delivered to owner"
        );

        self.mailer
            .send(&acknowledgement)
            .await
            .map_err(RelayError::Acknowledgement)?;

        info!(to = %submission.email, "Contact acknowledgement delivered to sender");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::{ACKNOWLEDGEMENT_SUBJECT, ContactSubmission, MailError, MailMessage};

    /// Records every message and fails the send whose (1-based) index matches `fail_on`.
    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<MailMessage>>,
        attempts: Mutex<usize>,
        fail_on: Option<usize>,
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
                return Err(MailError::Rejected("mailbox unavailable".to_owned()));
            }

            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    fn relay(mailer: Arc<RecordingMailer>) -> Relay {
        Relay::new(
            mailer,
            RelayConfig {
                from_address: "relay@questfolio.localhost".to_owned(),
                owner_address: "owner@questfolio.localhost".to_owned(),
                owner_name: "Quest Owner".to_owned(),
            },
        )
    }

    fn request() -> ContactRequest {
        ContactSubmission::new("Ana", "a@b.com", "Hi", "Hello\nworld").into()
    }

    #[tokio::test]
    async fn sends_notification_then_acknowledgement() {
        let mailer = Arc::new(RecordingMailer::default());

        relay(mailer.clone()).relay(request()).await.unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "owner@questfolio.localhost");
        assert!(sent[0].html_body.contains("Hello<br>world"));
        assert_eq!(sent[1].to, "a@b.com");
        assert_eq!(sent[1].subject, ACKNOWLEDGEMENT_SUBJECT);
    }

    #[tokio::test]
    async fn invalid_request_sends_nothing() {
        let mailer = Arc::new(RecordingMailer::default());
        let mut request = request();
        request.name = Some(String::new());

        let err = relay(mailer.clone()).relay(request).await.unwrap_err();

        assert!(matches!(err, RelayError::Validation(_)));
        assert_eq!(*mailer.attempts.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn failed_notification_skips_acknowledgement() {
        let mailer = Arc::new(RecordingMailer {
            fail_on: Some(1),
            ..Default::default()
        });

        let err = relay(mailer.clone()).relay(request()).await.unwrap_err();

        assert!(matches!(err, RelayError::Notification(_)));
        assert!(!err.owner_notified());
        assert_eq!(*mailer.attempts.lock().unwrap(), 1);
        assert!(mailer.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_acknowledgement_is_reported_after_owner_was_notified() {
        let mailer = Arc::new(RecordingMailer {
            fail_on: Some(2),
            ..Default::default()
        });

        let err = relay(mailer.clone()).relay(request()).await.unwrap_err();

        assert!(matches!(err, RelayError::Acknowledgement(_)));
        assert!(err.owner_notified());
        assert_eq!(err.stage(), "acknowledgement");
        assert_eq!(mailer.sent.lock().unwrap().len(), 1);
    }
}
