//! Route definitions
//!
//! Read-only endpoints over the message table and its sentiment aggregates.

use axum::{routing::get, Router};

use crate::handlers::{health, messages, sentiment};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(message_routes())
        .merge(sentiment_routes())
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Raw message rows
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/mensagens", get(messages::list_messages))
        .route("/mensagens/:message_id", get(messages::get_message))
}

/// Dashboard aggregates
fn sentiment_routes() -> Router<AppState> {
    Router::new()
        .route("/sentiment/daily", get(sentiment::daily_summary))
        .route("/sentiment/hourly", get(sentiment::hourly_summary))
        .route("/sentiment/overall", get(sentiment::overall_summary))
}
