// Ping handler

use tracing::{debug, instrument};

/// Body returned by `GET /ping`
pub const PONG: &str = "PONG";

/// Liveness check. Reads nothing from the request and always answers `PONG`.
#[instrument]
pub async fn ping_handler() -> &'static str {
    debug!("Ping endpoint called");
    PONG
}
