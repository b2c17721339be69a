use axum::{Json, body::Bytes, extract::State, response::IntoResponse};
use questfolio_contact::ContactRequest;
use serde_json::json;

use crate::{error::ApiError, routes::AppState};

pub const SUCCESS_MESSAGE: &str = "Email sent successfully";

/// POST /api/contact
///
/// Notifies the owner, then acknowledges the sender. A body that is not JSON
/// (or is `null`) is treated like any other internal failure.
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request = ContactRequest::from_json(&body).map_err(|e| {
        tracing::error!(error = %e, "Error sending email");
        ApiError::Send
    })?;

    app_state.relay.relay(request).await?;

    Ok(Json(json!({ "message": SUCCESS_MESSAGE })))
}
