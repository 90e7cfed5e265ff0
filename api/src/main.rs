//! TODO API Server
//!
//! A single `/todos` endpoint that creates todo items behind a pluggable
//! authenticator and a pluggable store.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::any, Router};
use sea_orm::Database;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    AllowAllAuthenticator, InMemoryTodoRepository, PostgresTodoRepository,
    StaticTokenAuthenticator,
};
use app::TodoService;
use config::Config;
use domain::ports::{Authenticator, TodoRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub todo_service: Arc<TodoService<dyn Authenticator, dyn TodoRepository>>,
}

/// Build the router; every method on `/todos` reaches the create handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", any(handlers::create_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn build_authenticator(config: &Config) -> Arc<dyn Authenticator> {
    let static_tokens = StaticTokenAuthenticator::new(&config.auth_tokens);
    if static_tokens.is_empty() {
        tracing::warn!("AUTH_TOKENS not set, accepting every token");
        Arc::new(AllowAllAuthenticator)
    } else {
        tracing::info!(tokens = static_tokens.len(), "Loaded auth tokens");
        Arc::new(static_tokens)
    }
}

async fn build_repository(config: &Config) -> anyhow::Result<Arc<dyn TodoRepository>> {
    let Some(url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, todos are kept in memory");
        return Ok(Arc::new(InMemoryTodoRepository::new()));
    };

    tracing::info!("Connecting to database...");
    let db = Database::connect(url)
        .await
        .context("Failed to connect to database")?;
    let repo = PostgresTodoRepository::new(db);
    repo.ensure_schema()
        .await
        .context("Failed to create todos table")?;
    tracing::info!("Database connected");

    Ok(Arc::new(repo))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,todo_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TODO API...");

    let config = Config::from_env();

    let authenticator = build_authenticator(&config);
    let repository = build_repository(&config).await?;

    let todo_service = TodoService::new(authenticator, repository)
        .with_timeouts(config.auth_timeout, config.store_timeout);
    let state = AppState {
        todo_service: Arc::new(todo_service),
    };

    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
