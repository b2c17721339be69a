pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod reveal;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
