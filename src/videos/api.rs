//! Video API Endpoints
//! Mission: Token-gated CRUD handlers over the video store

use crate::app::AppState;
use crate::auth::models::ClientRef;
use crate::error::{decode_body, ApiError};
use crate::videos::models::{Video, VideoIdQuery, VideoInput};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::debug;

/// List videos - GET /videos
pub async fn list_videos(
    State(state): State<AppState>,
    Extension(client): Extension<ClientRef>,
) -> Json<Vec<Video>> {
    debug!("{} listing videos", client.id);
    Json(state.videos.list())
}

/// Get one video - GET /video?id=
pub async fn get_video(
    State(state): State<AppState>,
    Extension(client): Extension<ClientRef>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Video>, ApiError> {
    let query = VideoIdQuery::from_pairs(pairs);
    debug!("{} fetching video {}", client.id, query.id);
    state.videos.get(&query.id).map(Json).ok_or(ApiError::NotFound)
}

/// Create video - POST /video/create
pub async fn create_video(
    State(state): State<AppState>,
    Extension(client): Extension<ClientRef>,
    body: Bytes,
) -> Result<Json<Video>, ApiError> {
    let input: VideoInput = decode_body(&body)?;
    let video = state.videos.create(&input.title, &input.url);

    debug!("{} created video {}", client.id, video.id);
    Ok(Json(video))
}

/// Update video - PUT|POST /video/update?id=
pub async fn update_video(
    State(state): State<AppState>,
    Extension(client): Extension<ClientRef>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<Video>, ApiError> {
    let query = VideoIdQuery::from_pairs(pairs);
    let input: VideoInput = decode_body(&body)?;

    debug!("{} updating video {}", client.id, query.id);
    state
        .videos
        .update(&query.id, &input.title, &input.url)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Delete video - DELETE|POST /video/delete?id=
pub async fn delete_video(
    State(state): State<AppState>,
    Extension(client): Extension<ClientRef>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<StatusCode, ApiError> {
    let query = VideoIdQuery::from_pairs(pairs);
    debug!("{} deleting video {}", client.id, query.id);
    state.videos.delete(&query.id)?;
    Ok(StatusCode::NO_CONTENT)
}
