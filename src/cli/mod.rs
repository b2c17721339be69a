pub mod contact;
pub mod server;
