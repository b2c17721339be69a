use thiserror::Error;

/// Failure while relaying a contact submission.
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("All fields are required")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Failed to render email: {0}")]
    Render(#[from] askama::Error),

    #[error("Notification to owner failed: {0}")]
    Notification(#[source] MailError),

    #[error("Acknowledgement to sender failed: {0}")]
    Acknowledgement(#[source] MailError),
}

impl RelayError {
    /// The owner already got the notification when the acknowledgement fails.
    pub fn owner_notified(&self) -> bool {
        matches!(self, RelayError::Acknowledgement(_))
    }

    pub fn stage(&self) -> &'static str {
        match self {
            RelayError::Validation(_) => "validation",
            RelayError::Render(_) => "render",
            RelayError::Notification(_) => "notification",
            RelayError::Acknowledgement(_) => "acknowledgement",
        }
    }
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid address {address}: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Mail task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("Mail rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(u16),
}
