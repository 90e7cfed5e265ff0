//! Domain entities

pub mod todo;

pub use todo::Todo;
