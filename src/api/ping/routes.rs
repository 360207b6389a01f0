// Ping route definitions

use axum::{routing::get, Router};

use super::handler;

/// Creates router with the `/ping` liveness endpoint
pub fn ping_routes() -> Router {
    // `get` also answers HEAD; other methods fall through to axum's 405
    Router::new().route("/ping", get(handler::ping_handler))
}
