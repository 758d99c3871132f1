//! Authentication API Endpoints
//! Mission: Provide registration, login and identity endpoints

use crate::app::AppState;
use crate::auth::models::{ClientRef, Credentials, LoginResponse};
use crate::error::{decode_body, ApiError};
use axum::{body::Bytes, extract::State, http::StatusCode, Extension, Json};
use tracing::info;

/// Register endpoint - POST /register
pub async fn register(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, ApiError> {
    let payload: Credentials = decode_body(&body)?;

    state
        .clients
        .register(&payload.username, &payload.password)?;

    Ok(StatusCode::CREATED)
}

/// Login endpoint - POST /login
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let payload: Credentials = decode_body(&body)?;
    info!("🔐 Login attempt: {}", payload.username);

    let token = state
        .clients
        .login(&payload.username, &payload.password)?;

    Ok(Json(LoginResponse { token }))
}

/// Current client info - GET /me
pub async fn get_current_client(Extension(client): Extension<ClientRef>) -> Json<ClientRef> {
    Json(client)
}
