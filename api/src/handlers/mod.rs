//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod respond;
pub mod todos;

pub use todos::create_todo;
