//! User Table Server Library
//!
//! HTTP surface of the user activity dashboard: a read-only JSON listing of
//! user account metadata.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::create_router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
