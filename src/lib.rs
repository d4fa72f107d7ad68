//! data-server: a minimal HTTP service that answers `GET /data` with a
//! fixed plain-text payload.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use routes::create_router;
