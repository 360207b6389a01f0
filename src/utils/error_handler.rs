// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::error;

/// Maps errors raised by tower layers to HTTP responses.
/// Error details are only written to the body in debug mode.
pub async fn handle_global_error(err: BoxError, debug: bool) -> Response {
    // 408 if the request took too long
    let (status, detail) = if err.is::<Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, format!("Request timeout: {err}"))
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled internal error: {err}"),
        )
    };

    error!(status = status.as_u16(), "{detail}");

    if debug {
        (status, detail).into_response()
    } else {
        status.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn elapsed_maps_to_request_timeout() {
        let response = handle_global_error(Box::new(Elapsed::new()), false).await;

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn other_errors_map_to_internal_server_error() {
        let err: BoxError = "connection reset".into();
        let response = handle_global_error(err, false).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "");
    }

    #[tokio::test]
    async fn debug_mode_exposes_error_details() {
        let response = handle_global_error(Box::new(Elapsed::new()), true).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert!(body_text(response).await.starts_with("Request timeout:"));

        let err: BoxError = "connection reset".into();
        let response = handle_global_error(err, true).await;
        assert_eq!(
            body_text(response).await,
            "Unhandled internal error: connection reset"
        );
    }
}
