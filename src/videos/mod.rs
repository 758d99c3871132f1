//! Video Module
//! Mission: CRUD over the in-memory video catalogue

pub mod api;
pub mod models;
pub mod store;

pub use models::Video;
pub use store::VideoStore;
