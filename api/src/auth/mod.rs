//! Request authentication helpers

pub mod token;

pub use token::{extract_auth_token, hash_token};
