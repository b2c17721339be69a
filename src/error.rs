use askama::Template;
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use questfolio_contact::RelayError;
use serde_json::json;
use thiserror::Error;

pub const VALIDATION_ERROR_MESSAGE: &str = "All fields are required";
pub const SEND_ERROR_MESSAGE: &str = "Failed to send email";

/// Errors of the HTML pages.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPageTemplate {
    status_code: u16,
    error_title: &'static str,
    error_message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_title, error_message) = match &self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Area Not Found",
                "This corner of the dungeon does not exist. Head back to the portal.",
            ),
            AppError::Render(e) => {
                tracing::error!("Failed to render page: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.",
                )
            }
        };

        let template = ErrorPageTemplate {
            status_code: status_code.as_u16(),
            error_title,
            error_message,
        };

        match template.render() {
            Ok(html) => (status_code, Html(html)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {:?}", e);
                (status_code, format!("An error occurred: {}", self)).into_response()
            }
        }
    }
}

/// Errors of `POST /api/contact`, rendered as `{"error": ...}`.
///
/// Every failure past validation collapses into the same 500 so the wire
/// format stays what the form script expects; the stage is only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("All fields are required")]
    Validation,

    #[error("Failed to send email")]
    Send,
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Validation(e) => {
                tracing::debug!(error = %e, "Contact request rejected");
                ApiError::Validation
            }
            e => {
                tracing::error!(
                    error = %e,
                    stage = e.stage(),
                    owner_notified = e.owner_notified(),
                    "Error sending email"
                );
                ApiError::Send
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::Send => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
