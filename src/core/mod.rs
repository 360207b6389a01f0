// Process-level plumbing: logging setup and the HTTP server lifecycle.

pub mod logging;
pub mod server;
