// Application server configuration and setup

use std::{future::Future, net::SocketAddr};
use axum::{
    Router,
    BoxError,
    middleware::from_fn,
    error_handling::HandleErrorLayer,
    serve,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::info;

use crate::api::ping::routes::ping_routes;
use crate::config::environment::EnvironmentVariables;
use crate::utils::{
    error_handler::handle_global_error,
    request_logger::request_logger,
};

/// Creates the application router with all middleware layers
pub fn create_app(env: &EnvironmentVariables) -> Router {
    let routes: Router = Router::new()
        .merge(ping_routes());
        // Add new routes here

    apply_global_layers(routes, env)
}

/// Wraps a router in the access logger, error mapping and request timeout
pub fn apply_global_layers(router: Router, env: &EnvironmentVariables) -> Router {
    let debug: bool = env.debug;

    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(request_logger))
            .layer(HandleErrorLayer::new(move |err: BoxError| handle_global_error(err, debug)))
            .layer(TimeoutLayer::new(env.request_timeout()))
    )
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            info!("Using listener inherited from the environment");
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.bind_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Serves the app until `signal` resolves, then drains in-flight requests
pub async fn serve_until<F>(listener: TcpListener, app: Router, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // Client addresses are exposed to middleware through ConnectInfo
    serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(signal)
        .await
        .context("Server error")?;

    Ok(())
}

/// Serves the app until Ctrl+C or TERM
pub async fn run(listener: TcpListener, app: Router) -> Result<()> {
    serve_until(listener, app, shutdown_signal()).await
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}
