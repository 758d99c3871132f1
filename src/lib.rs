//! videohub Backend Library
//!
//! Client registration, session tokens and an in-memory video catalogue,
//! served over axum.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod videos;

pub use app::{router, AppState};
pub use error::ApiError;
