//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod auth;
pub mod memory;
pub mod postgres;

pub use auth::{AllowAllAuthenticator, StaticTokenAuthenticator};
pub use memory::InMemoryTodoRepository;
pub use postgres::PostgresTodoRepository;
