//! Request logging middleware.
//!
//! One line per request with method, path, status, latency and, on
//! authenticated routes, the id of the client that made the call.

use crate::auth::models::ClientRef;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// How a request ended, for log level and message selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Served,
    AuthRejected,
    ClientError,
    ServerError,
}

impl RequestOutcome {
    pub fn from_status(status: StatusCode) -> Self {
        if status.is_server_error() {
            RequestOutcome::ServerError
        } else if status == StatusCode::UNAUTHORIZED {
            RequestOutcome::AuthRejected
        } else if status.is_client_error() {
            RequestOutcome::ClientError
        } else {
            RequestOutcome::Served
        }
    }
}

/// Logs every request except health checks.
///
/// 401s are logged separately from other 4xx so failed logins and bad
/// session tokens are easy to grep for; 5xx go out at WARN.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if path == "/health" {
        return next.run(request).await;
    }

    let start = Instant::now();
    let response = next.run(request).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    let status = response.status();
    let client = response
        .extensions()
        .get::<ClientRef>()
        .map(|c| c.id.as_str())
        .unwrap_or("-");

    match RequestOutcome::from_status(status) {
        RequestOutcome::ServerError => warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            client,
            latency_ms,
            "Request failed (5xx)"
        ),
        RequestOutcome::AuthRejected => info!(
            method = %method,
            path = %path,
            latency_ms,
            "🔒 Request rejected: unauthenticated"
        ),
        RequestOutcome::ClientError => info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            client,
            latency_ms,
            "Request rejected (4xx)"
        ),
        RequestOutcome::Served => info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            client,
            latency_ms,
            "Request completed"
        ),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_classification() {
        assert_eq!(
            RequestOutcome::from_status(StatusCode::OK),
            RequestOutcome::Served
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::NO_CONTENT),
            RequestOutcome::Served
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::UNAUTHORIZED),
            RequestOutcome::AuthRejected
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::CONFLICT),
            RequestOutcome::ClientError
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::NOT_FOUND),
            RequestOutcome::ClientError
        );
        assert_eq!(
            RequestOutcome::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            RequestOutcome::ServerError
        );
    }
}
