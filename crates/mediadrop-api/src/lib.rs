//! Mediadrop API Library
//!
//! This crate provides the HTTP handlers, error rendering and application setup.

// Module declarations
mod handlers;
mod middleware;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
