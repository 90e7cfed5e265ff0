//! In-memory TodoRepository

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::Todo;
use crate::domain::ports::TodoRepository;
use crate::error::DomainError;

/// Process-local todo store; contents are lost on restart
#[derive(Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored todos in insertion order
    #[cfg(test)]
    pub fn list(&self) -> Result<Vec<Todo>, DomainError> {
        let todos = self
            .todos
            .read()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(todos.clone())
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: &Todo) -> Result<(), DomainError> {
        let mut todos = self
            .todos
            .write()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        todos.push(todo.clone());
        tracing::debug!(count = todos.len(), "Stored todo in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_appends_in_order() {
        let repo = InMemoryTodoRepository::new();

        repo.create(&Todo::new("task1", "cat1")).await.unwrap();
        repo.create(&Todo::new("task2", "cat2")).await.unwrap();

        assert_eq!(
            repo.list().unwrap(),
            vec![Todo::new("task1", "cat1"), Todo::new("task2", "cat2")]
        );
    }

    #[tokio::test]
    async fn duplicates_are_kept() {
        let repo = InMemoryTodoRepository::new();

        repo.create(&Todo::new("task1", "cat1")).await.unwrap();
        repo.create(&Todo::new("task1", "cat1")).await.unwrap();

        assert_eq!(repo.list().unwrap().len(), 2);
    }
}
