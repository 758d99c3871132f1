//! Authentication Module
//! Mission: Register clients and gate video access behind session tokens

pub mod api;
pub mod client_store;
pub mod middleware;
pub mod models;
pub mod token;

pub use client_store::ClientDirectory;
pub use middleware::auth_middleware;
pub use models::ClientRef;
pub use token::TokenGenerator;
