//! API Errors
//! Mission: Map domain failures onto bare HTTP status codes

use crate::auth::client_store::DirectoryError;
use crate::videos::store::VideoStoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// Request failure; rendered as a status code with an empty body
#[derive(Debug, PartialEq, Eq)]
pub enum ApiError {
    MalformedInput,
    Unauthenticated,
    InvalidCredentials,
    UsernameTaken,
    NotFound,
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::UsernameTaken => StatusCode::CONFLICT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MalformedInput => write!(f, "Malformed request body"),
            ApiError::Unauthenticated => write!(f, "Authentication required"),
            ApiError::InvalidCredentials => write!(f, "Invalid username or password"),
            ApiError::UsernameTaken => write!(f, "Username already exists"),
            ApiError::NotFound => write!(f, "Not found"),
            ApiError::Internal => write!(f, "Internal server error"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::UsernameTaken => ApiError::UsernameTaken,
            DirectoryError::InvalidCredentials => ApiError::InvalidCredentials,
            DirectoryError::TokenGeneration(e) => {
                error!("Token generation failed: {}", e);
                ApiError::Internal
            }
        }
    }
}

impl From<VideoStoreError> for ApiError {
    fn from(err: VideoStoreError) -> Self {
        match err {
            VideoStoreError::NotFound => ApiError::NotFound,
        }
    }
}

/// Decode a JSON request body; any parse failure is `MalformedInput`
pub fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!("Rejecting malformed body: {}", e);
        ApiError::MalformedInput
    })
}
