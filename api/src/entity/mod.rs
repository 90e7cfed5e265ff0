//! SeaORM entities
//!
//! Table models used by the PostgreSQL adapters. Domain code never sees these.

pub mod todos;
