//! Application wiring: shared state and the HTTP router

use crate::auth::{self, auth_middleware, ClientDirectory, TokenGenerator};
use crate::middleware::request_logging;
use crate::videos::{self, VideoStore};
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientDirectory>,
    pub videos: Arc<VideoStore>,
}

impl AppState {
    pub fn new(tokens: TokenGenerator) -> Self {
        Self {
            clients: Arc::new(ClientDirectory::new(tokens)),
            videos: Arc::new(VideoStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TokenGenerator::default())
    }
}

/// Build the full router (public, auth and protected routes)
pub fn router(state: AppState) -> Router {
    router_with_cors(state, false)
}

pub fn router_with_cors(state: AppState, permissive_cors: bool) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/register", post(auth::api::register))
        .route("/login", post(auth::api::login))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/videos", get(videos::api::list_videos))
        .route("/video", get(videos::api::get_video))
        .route("/video/create", post(videos::api::create_video))
        .route(
            "/video/update",
            post(videos::api::update_video).put(videos::api::update_video),
        )
        .route(
            "/video/delete",
            post(videos::api::delete_video).delete(videos::api::delete_video),
        )
        .route("/me", get(auth::api::get_current_client))
        .route_layer(middleware::from_fn_with_state(
            state.clients.clone(),
            auth_middleware,
        ))
        .with_state(state);

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn(request_logging));

    if permissive_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
