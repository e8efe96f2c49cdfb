//! Single-route HTTP server answering `GET /` with a fixed JSON payload.

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::Config;
pub use error::Error;
pub use server::Server;
