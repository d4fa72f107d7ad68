//! HTTP route table.
//!
//! A single route is served. Unmatched paths and methods fall through to
//! axum's default 404 and 405 responses. Request tracing is enabled via
//! middleware that tags each request with a unique request ID.

pub mod data;

use axum::{
    http::header::{HeaderValue, CACHE_CONTROL},
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_DATA;
use crate::middleware::request_id_layer;

/// Path of the fixed-payload route.
pub const DATA_PATH: &str = "/data";

/// Creates the Axum router with the data route and request tracing.
pub fn create_router() -> Router {
    // Payload is constant - long cache with immutable hint.
    // route_layer leaves the 405 fallback of the method router uncached.
    let data_routes = Router::new().route(
        DATA_PATH,
        get(data::data).route_layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_DATA),
        )),
    );

    Router::new()
        .merge(data_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
