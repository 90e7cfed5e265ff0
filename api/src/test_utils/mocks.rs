//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::domain::entities::Todo;
use crate::domain::ports::{Authenticator, TodoRepository};
use crate::error::DomainError;

// ============================================================================
// Mock Authenticator
// ============================================================================

#[derive(Default)]
pub struct MockAuthenticator {
    authenticated: bool,
    delay: Option<Duration>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockAuthenticator {
    /// Accepts every token
    pub fn allowing() -> Self {
        Self {
            authenticated: true,
            ..Default::default()
        }
    }

    /// Rejects every token
    pub fn denying() -> Self {
        Self::default()
    }

    /// Sleep before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Tokens passed to `is_authenticated`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn is_authenticated(&self, token: &str) -> bool {
        self.calls.write().unwrap().push(token.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.authenticated
    }
}

// ============================================================================
// Mock Todo Repository
// ============================================================================

#[derive(Default)]
pub struct MockTodoRepository {
    failure: Option<String>,
    delay: Option<Duration>,
    attempted: Arc<RwLock<Vec<Todo>>>,
    created: Arc<RwLock<Vec<Todo>>>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `create` call fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// Sleep before storing
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of `create` calls
    pub fn calls(&self) -> usize {
        self.attempted.read().unwrap().len()
    }

    /// Todos passed to `create`, including failed attempts
    pub fn attempted(&self) -> Vec<Todo> {
        self.attempted.read().unwrap().clone()
    }

    /// Todos that were stored successfully
    pub fn created(&self) -> Vec<Todo> {
        self.created.read().unwrap().clone()
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn create(&self, todo: &Todo) -> Result<(), DomainError> {
        self.attempted.write().unwrap().push(todo.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = &self.failure {
            return Err(DomainError::Database(message.clone()));
        }
        self.created.write().unwrap().push(todo.clone());
        Ok(())
    }
}
