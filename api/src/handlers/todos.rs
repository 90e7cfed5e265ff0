//! Todo handlers
//!
//! The single create endpoint. Every method is routed here so that the 405
//! body is ours rather than the router's.

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    response::Response,
};

use crate::auth::extract_auth_token;
use crate::domain::entities::Todo;
use crate::error::AppError;
use crate::handlers::respond::respond;
use crate::AppState;

/// Upper bound on request bodies read by the handler
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// POST /todos
///
/// Checks run in order and the first failure ends the request:
/// method, `AuthToken` header, JSON body, todo fields, store.
pub async fn create_todo(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, AppError> {
    if *request.method() != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let token = extract_auth_token(request.headers());
    if !state.todo_service.is_authenticated(&token).await {
        return Err(AppError::Unauthenticated);
    }

    let body = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::InvalidJson(e.to_string()))?;
    let todo = Todo::from_json(&body)?;

    state.todo_service.create(todo).await?;

    Ok(respond(StatusCode::CREATED, "todo created"))
}
