//! Contact form controller.
//!
//! Holds the field values and the outcome of the last submission. A
//! submission posts the fields once; on success they are cleared, on failure
//! they are kept so the visitor can retry. The outcome banner is dismissed
//! back to [`SubmissionStatus::Idle`] after [`DISMISS_AFTER`].

use std::{sync::Arc, time::Duration};

use strum::{AsRefStr, Display};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{ContactClient, ContactSubmission, Field};

pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);

#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some("Message Sent Successfully!"),
            SubmissionStatus::Error => Some("Message Failed to Send"),
        }
    }
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub fields: ContactSubmission,
    pub status: SubmissionStatus,
    pub is_submitting: bool,
}

impl FormState {
    /// The submit control is disabled while a request is in flight, and the
    /// browser refuses to submit with an empty required field.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && self.fields.is_complete()
    }
}

#[derive(Default)]
struct Inner {
    state: FormState,
    // bumped on every settled submission; a dismiss timer only clears its own
    outcome: u64,
}

pub struct ContactForm<C> {
    client: Arc<C>,
    inner: Arc<Mutex<Inner>>,
    dismiss_after: Duration,
}

impl<C> Clone for ContactForm<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            inner: Arc::clone(&self.inner),
            dismiss_after: self.dismiss_after,
        }
    }
}

impl<C: ContactClient + 'static> ContactForm<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
            inner: Arc::default(),
            dismiss_after: DISMISS_AFTER,
        }
    }

    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    pub async fn state(&self) -> FormState {
        self.inner.lock().await.state.clone()
    }

    pub async fn set_field(&self, field: Field, value: impl Into<String>) {
        self.inner.lock().await.state.fields.set(field, value);
    }

    /// Posts the current fields. Never fails: the outcome lands in the status.
    pub async fn submit(&self) {
        let fields = {
            let mut inner = self.inner.lock().await;
            if !inner.state.can_submit() {
                debug!(
                    is_submitting = inner.state.is_submitting,
                    "Contact form submit ignored"
                );
                return;
            }

            inner.state.is_submitting = true;
            inner.state.fields.clone()
        };

        let result = self.client.submit(&fields).await;

        let outcome = {
            let mut inner = self.inner.lock().await;
            match result {
                Ok(()) => {
                    inner.state.status = SubmissionStatus::Success;
                    inner.state.fields.clear();
                }
                Err(e) => {
                    warn!(error = %e, "Error submitting contact form");
                    inner.state.status = SubmissionStatus::Error;
                }
            }
            inner.state.is_submitting = false;
            inner.outcome += 1;
            inner.outcome
        };

        self.schedule_dismiss(outcome);
    }

    fn schedule_dismiss(&self, outcome: u64) {
        let inner = Arc::clone(&self.inner);
        let dismiss_after = self.dismiss_after;

        tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;

            let mut inner = inner.lock().await;
            if inner.outcome == outcome {
                inner.state.status = SubmissionStatus::Idle;
            }
        });
    }
}
