//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks record every call so tests can assert how often (and with what)
//! each port was reached, and can be told to fail or stall.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
