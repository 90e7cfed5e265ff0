//! PostgreSQL adapter for TodoRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Schema, Set};
use uuid::Uuid;

use crate::domain::entities::Todo;
use crate::domain::ports::TodoRepository;
use crate::entity::todos;
use crate::error::DomainError;

/// PostgreSQL implementation of TodoRepository
pub struct PostgresTodoRepository {
    db: DatabaseConnection,
}

impl PostgresTodoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `todos` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        let backend = self.db.get_database_backend();
        let mut stmt = Schema::new(backend).create_table_from_entity(todos::Entity);
        stmt.if_not_exists();

        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, todo: &Todo) -> Result<(), DomainError> {
        let id = Uuid::new_v4();

        let model = todos::ActiveModel {
            id: Set(id),
            name: Set(todo.name.clone()),
            category: Set(todo.category.clone()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        tracing::debug!(%id, "Inserted todo row");
        Ok(())
    }
}
