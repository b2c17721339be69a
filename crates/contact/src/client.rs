use async_trait::async_trait;
use tracing::debug;

use crate::{ClientError, ContactSubmission};

pub const CONTACT_PATH: &str = "/api/contact";

/// Sends a submission to the relay endpoint.
#[async_trait]
pub trait ContactClient: Send + Sync {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ClientError>;
}

/// Posts submissions as JSON with reqwest. Any non-2xx status is an error.
#[derive(Clone)]
pub struct HttpContactClient {
    inner: reqwest::Client,
    endpoint: String,
}

impl HttpContactClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let inner = reqwest::Client::builder().build()?;

        Ok(Self::with_client(inner, base_url))
    }

    pub fn with_client(inner: reqwest::Client, base_url: &str) -> Self {
        Self {
            inner,
            endpoint: format!("{}{CONTACT_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactClient for HttpContactClient {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ClientError> {
        let response = self
            .inner
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        debug!(endpoint = %self.endpoint, status = status.as_u16(), "Contact request answered");

        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Status(status.as_u16()))
        }
    }
}
