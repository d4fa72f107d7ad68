//! HTTP server module.
//!
//! Serves plain HTTP/1.1 through `axum_server` and drains in-flight
//! connections on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
