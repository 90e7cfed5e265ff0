//! Test fixtures
//!
//! Factory functions for test data, app wiring and request plumbing.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::app::TodoService;
use crate::domain::entities::Todo;
use crate::domain::ports::{Authenticator, TodoRepository};
use crate::{build_router, AppState};

/// Token sent by well-behaved test clients
pub const TEST_TOKEN: &str = "example-auth-token";

/// Create the todo every happy-path test posts
pub fn test_todo() -> Todo {
    Todo::new("task1", "cat1")
}

/// Build app state around the given ports
pub fn test_state(auth: Arc<dyn Authenticator>, todos: Arc<dyn TodoRepository>) -> AppState {
    AppState {
        todo_service: Arc::new(TodoService::new(auth, todos)),
    }
}

/// Build the full router around the given ports
pub fn test_router<A, R>(auth: Arc<A>, todos: Arc<R>) -> Router
where
    A: Authenticator + 'static,
    R: TodoRepository + 'static,
{
    build_router(test_state(auth, todos))
}

/// Build a request against `/todos`
pub fn todo_request(method: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri("/todos");
    if let Some(token) = token {
        builder = builder.header("AuthToken", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// Run one request through the router and collect status and body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
