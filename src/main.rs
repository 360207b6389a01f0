// Start of file: src/main.rs

use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, info};

use ping_service::config::environment::EnvironmentVariables;
use ping_service::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env: EnvironmentVariables = EnvironmentVariables::load()?;

    // set up logging
    init_tracing(&env);
    debug!("Loaded environment configuration: {:#?}", env);

    if env.debug && env.is_production() {
        tracing::warn!("Debug mode is enabled in production; error details will be exposed");
    }

    let app: Router = server::create_app(&env);
    let listener: TcpListener = server::setup_listener(&env).await?;

    info!(
        environment = %env.environment,
        debug = env.debug,
        "Server listening on: http://{}",
        listener.local_addr()?
    );

    server::run(listener, app).await
}

// End of file: src/main.rs
