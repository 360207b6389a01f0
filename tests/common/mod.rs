//! tests/common/mod.rs
//! A shared test helper to spawn the ping service on an ephemeral port.

// * Each test crate uses a different subset of these helpers.
#![allow(dead_code)]

use once_cell::sync::Lazy;
use ping_service::{create_app, serve_until, EnvironmentVariables};
use tokio::net::TcpListener as TokioTcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

// * Logs are only printed when TEST_LOG is set.
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("ping_service=debug")
            .with_test_writer()
            .try_init();
    }
});

pub struct TestApp {
    pub base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    pub server: JoinHandle<anyhow::Result<()>>,
}

impl TestApp {
    /// Triggers graceful shutdown and waits for the server task to finish.
    pub async fn shutdown(mut self) -> anyhow::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.server.await?
    }
}

/// Spawns the app with default configuration.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(EnvironmentVariables::default()).await
}

/// Spawns the app on a random unused port and returns its handle.
pub async fn spawn_app_with(env: EnvironmentVariables) -> TestApp {
    Lazy::force(&TRACING);

    // * Bind an ephemeral port on loopback regardless of the configured host.
    let listener: TokioTcpListener = TokioTcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    let app = create_app(&env);

    // * Spawn the server in a background task.
    let server = tokio::spawn(serve_until(listener, app, async move {
        let _ = rx.await;
    }));

    TestApp {
        base_url: format!("http://{}", addr),
        shutdown: Some(tx),
        server,
    }
}
