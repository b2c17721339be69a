use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use questfolio_contact::Relay;

use crate::error::AppError;

mod assets;
mod contact;
mod health;
mod index;
mod projects;

pub use assets::AssetsService;
pub use contact::SUCCESS_MESSAGE;
pub use index::IndexTemplate;

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

pub async fn fallback() -> impl IntoResponse {
    AppError::NotFound
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/projects/{id}", get(projects::detail))
        .route("/api/contact", post(contact::action))
        .nest_service("/static", AssetsService::new())
        .fallback(fallback)
        .with_state(app_state)
}
