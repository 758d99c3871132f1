//! Authentication Middleware
//! Mission: Protect video endpoints with session token validation

use crate::auth::client_store::ClientDirectory;
use crate::error::ApiError;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

/// Auth middleware that resolves the session token to a client
pub async fn auth_middleware(
    State(directory): State<Arc<ClientDirectory>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(req.headers()).ok_or(ApiError::Unauthenticated)?;

    let client = directory.resolve_token(token).ok_or_else(|| {
        debug!("Rejected unknown session token");
        ApiError::Unauthenticated
    })?;

    // Handlers take the client as an `Extension<ClientRef>` argument
    req.extensions_mut().insert(client.clone());

    // Echoed on the response so request logging can attribute the call
    let mut response = next.run(req).await;
    response.extensions_mut().insert(client);

    Ok(response)
}

/// Pull the session token out of the Authorization header.
///
/// The raw header value is the token; a `Bearer ` scheme prefix is tolerated.
pub fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let raw = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();
    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_raw_token_accepted() {
        let headers = headers_with("abc123");
        assert_eq!(extract_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_bearer_prefix_stripped() {
        let headers = headers_with("Bearer abc123");
        assert_eq!(extract_token(&headers), Some("abc123"));
    }

    #[test]
    fn test_missing_or_empty_token() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
        assert_eq!(extract_token(&headers_with("")), None);
        assert_eq!(extract_token(&headers_with("   ")), None);
        assert_eq!(extract_token(&headers_with("Bearer ")), None);
    }
}
