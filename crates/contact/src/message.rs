use askama::Template;

use crate::ContactSubmission;

pub const NOTIFICATION_SUBJECT_PREFIX: &str = "Portfolio Contact: ";
pub const ACKNOWLEDGEMENT_SUBJECT: &str = "Thank you for contacting me!";

/// An outgoing email. Built per request, never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

/// Who the relay writes as and to.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub from_address: String,
    pub owner_address: String,
    pub owner_name: String,
}

#[derive(Template)]
#[template(path = "emails/notification.html")]
struct NotificationTemplate<'a> {
    submission: &'a ContactSubmission,
    message_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "emails/acknowledgement.html")]
struct AcknowledgementTemplate<'a> {
    name: &'a str,
    owner_name: &'a str,
    message_lines: Vec<&'a str>,
}

impl RelayConfig {
    /// Email to the site owner carrying the whole submission.
    pub fn notification(&self, submission: &ContactSubmission) -> askama::Result<MailMessage> {
        let html_body = NotificationTemplate {
            submission,
            message_lines: submission.message.split('\n').collect(),
        }
        .render()?;

        Ok(MailMessage {
            from: self.from_address.to_owned(),
            to: self.owner_address.to_owned(),
            subject: format!("{NOTIFICATION_SUBJECT_PREFIX}{}", submission.subject),
            html_body,
        })
    }

    /// Thank-you email back to the sender, quoting their message.
    pub fn acknowledgement(&self, submission: &ContactSubmission) -> askama::Result<MailMessage> {
        let html_body = AcknowledgementTemplate {
            name: &submission.name,
            owner_name: &self.owner_name,
            message_lines: submission.message.split('\n').collect(),
        }
        .render()?;

        Ok(MailMessage {
            from: self.from_address.to_owned(),
            to: submission.email.to_owned(),
            subject: ACKNOWLEDGEMENT_SUBJECT.to_owned(),
            html_body,
        })
    }
}
