// Start of file: /src/core/logging.rs

use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::environment::EnvironmentVariables;

/// Default log directives, used when RUST_LOG is not set
pub fn default_directives(env: &EnvironmentVariables) -> &'static str {
    if env.debug {
        "ping_service=debug,axum=debug"
    } else {
        "ping_service=info,axum=info"
    }
}

// Initialize the tracing subscriber; RUST_LOG takes precedence over the defaults
pub fn init_tracing(env: &EnvironmentVariables) {
    let env_filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    // Span enter/exit noise is only useful while debugging
    let span_events: FmtSpan = if env.debug { FmtSpan::CLOSE } else { FmtSpan::NONE };

    fmt()
        .with_env_filter(env_filter)
        .with_span_events(span_events)
        .init();
}


// End of file: /src/core/logging.rs
