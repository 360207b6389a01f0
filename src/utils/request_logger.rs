// Access logging middleware, one line per request in the usual
// development-server shape:
// 127.0.0.1 - - [16/Oct/2026 12:00:00] "GET /ping HTTP/1.1" 200 -

use std::{convert::Infallible, net::SocketAddr, time::Instant};
use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request, Response, StatusCode, Uri, Version},
    middleware::Next,
};
use chrono::{DateTime, Local};
use tracing::info;

const TIMESTAMP_FORMAT: &str = "%d/%b/%Y %H:%M:%S";

/// Renders a single access log line
pub fn format_access_line(
    client: Option<SocketAddr>,
    timestamp: DateTime<Local>,
    method: &Method,
    uri: &Uri,
    version: Version,
    status: StatusCode,
) -> String {
    let client: String = client
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let target: &str = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    format!(
        "{client} - - [{}] \"{method} {target} {version:?}\" {} -",
        timestamp.format(TIMESTAMP_FORMAT),
        status.as_u16(),
    )
}

/// Middleware that logs every request once its response is ready
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let start_time: Instant = Instant::now();

    let client: Option<SocketAddr> = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let method: Method = req.method().clone();
    let uri: Uri = req.uri().clone();
    let version: Version = req.version();

    let response: Response<Body> = next.run(req).await;

    let elapsed_ms: u64 = start_time.elapsed().as_millis() as u64;
    let line: String =
        format_access_line(client, Local::now(), &method, &uri, version, response.status());

    info!(
        method = %method,
        uri = %uri,
        status = response.status().as_u16(),
        elapsed_ms,
        "{line}"
    );

    Ok(response)
}
