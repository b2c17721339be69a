mod client;
mod error;
mod form;
mod mailer;
mod message;
mod relay;
mod submission;

pub use client::*;
pub use error::*;
pub use form::*;
pub use mailer::*;
pub use message::*;
pub use relay::*;
pub use submission::*;
