use anyhow::{Result, bail};
use questfolio_contact::{ContactForm, Field, HttpContactClient, SubmissionStatus};

pub struct ContactInput {
    pub url: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Fills the contact form from the command line and submits it to a running server.
pub async fn send(input: ContactInput) -> Result<()> {
    let client = HttpContactClient::new(&input.url)?;
    tracing::info!(endpoint = client.endpoint(), "Submitting contact form");

    let form = ContactForm::new(client);
    form.set_field(Field::Name, input.name).await;
    form.set_field(Field::Email, input.email).await;
    form.set_field(Field::Subject, input.subject).await;
    form.set_field(Field::Message, input.message).await;

    if !form.state().await.can_submit() {
        bail!("All fields are required");
    }

    form.submit().await;

    let state = form.state().await;
    let banner = state.status.banner().unwrap_or_default();

    match state.status {
        SubmissionStatus::Success => {
            tracing::info!("{banner}");
            Ok(())
        }
        _ => bail!("{banner}"),
    }
}
