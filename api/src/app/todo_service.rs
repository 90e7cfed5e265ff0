//! Todo service
//!
//! Wraps the authenticator and store ports behind the two calls the create
//! handler makes, applying the configured timeouts.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::Todo;
use crate::domain::ports::{Authenticator, TodoRepository};
use crate::error::{AppError, DomainError};

/// Service for creating todos
pub struct TodoService<A, R>
where
    A: Authenticator + ?Sized,
    R: TodoRepository + ?Sized,
{
    auth: Arc<A>,
    todos: Arc<R>,
    auth_timeout: Option<Duration>,
    store_timeout: Option<Duration>,
}

impl<A, R> TodoService<A, R>
where
    A: Authenticator + ?Sized,
    R: TodoRepository + ?Sized,
{
    pub fn new(auth: Arc<A>, todos: Arc<R>) -> Self {
        Self {
            auth,
            todos,
            auth_timeout: None,
            store_timeout: None,
        }
    }

    pub fn with_timeouts(
        mut self,
        auth_timeout: Option<Duration>,
        store_timeout: Option<Duration>,
    ) -> Self {
        self.auth_timeout = auth_timeout;
        self.store_timeout = store_timeout;
        self
    }

    /// Ask the authenticator about `token` exactly once.
    ///
    /// A check that outlives the auth timeout counts as unauthenticated.
    pub async fn is_authenticated(&self, token: &str) -> bool {
        let check = self.auth.is_authenticated(token);
        let Some(limit) = self.auth_timeout else {
            return check.await;
        };

        match tokio::time::timeout(limit, check).await {
            Ok(authenticated) => authenticated,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = limit.as_millis() as u64,
                    "Authentication check timed out"
                );
                false
            }
        }
    }

    /// Validate `todo` and hand it to the store exactly once.
    pub async fn create(&self, todo: Todo) -> Result<(), AppError> {
        todo.validate()?;

        let insert = self.todos.create(&todo);
        match self.store_timeout {
            Some(limit) => tokio::time::timeout(limit, insert)
                .await
                .map_err(|_| DomainError::Timeout(limit))??,
            None => insert.await?,
        }

        tracing::info!(name = %todo.name, category = %todo.category, "Created todo");
        Ok(())
    }
}
