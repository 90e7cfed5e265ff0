//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod authenticator;
pub mod repositories;

pub use authenticator::Authenticator;
pub use repositories::TodoRepository;
