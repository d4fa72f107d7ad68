//! The fixed-payload endpoint.

/// Body returned by `GET /data`.
pub const DATA_BODY: &str = "Here is your data!";

/// Returns [`DATA_BODY`] as `text/plain; charset=utf-8`.
pub async fn data() -> &'static str {
    DATA_BODY
}
