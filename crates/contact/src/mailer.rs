//! Mail transport used by the relay.

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::info;

use crate::{MailError, MailMessage};

/// Delivers one email. The relay only depends on this.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}

#[derive(Clone, Debug)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

/// SMTP mailer backed by lettre.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let transport = if settings.username.is_empty() || settings.password.is_empty() {
            info!(
                smtp_host = %settings.host,
                smtp_port = settings.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&settings.host)
                .port(settings.port)
                .build()
        } else {
            info!(
                smtp_host = %settings.host,
                smtp_port = settings.port,
                "Mailer initialized with authentication and TLS"
            );
            let creds = Credentials::new(settings.username.clone(), settings.password.clone());
            // 465 is implicit TLS, everything else negotiates STARTTLS
            let builder = if settings.port == 465 {
                SmtpTransport::relay(&settings.host)?
            } else {
                SmtpTransport::starttls_relay(&settings.host)?
            };

            builder.port(settings.port).credentials(creds).build()
        };

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let email = build_message(message)?;
        let transport = self.transport.clone();

        tokio::task::spawn_blocking(move || transport.send(&email)).await??;

        info!(to = %message.to, subject = %message.subject, "Email sent");

        Ok(())
    }
}

/// Turns a [`MailMessage`] into an HTML lettre message.
pub fn build_message(message: &MailMessage) -> Result<Message, MailError> {
    let email = Message::builder()
        .from(parse_mailbox(&message.from)?)
        .to(parse_mailbox(&message.to)?)
        .subject(message.subject.to_owned())
        .header(ContentType::TEXT_HTML)
        .body(message.html_body.to_owned())?;

    Ok(email)
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|source| MailError::Address {
        address: address.to_owned(),
        source,
    })
}
