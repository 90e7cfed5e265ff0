//! In-memory adapters
//!
//! Used when no database is configured.

pub mod todo_repo;

pub use todo_repo::InMemoryTodoRepository;
