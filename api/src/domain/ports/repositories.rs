//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory, PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::Todo;
use crate::error::DomainError;

/// Repository for Todo entities
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a validated todo
    async fn create(&self, todo: &Todo) -> Result<(), DomainError>;
}
