//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod todo_repo;


pub use todo_repo::PostgresTodoRepository;
