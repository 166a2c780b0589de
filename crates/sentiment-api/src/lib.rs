//! # sentiment-api
//!
//! HTTP read API built with Axum. The same process hosts the background
//! annotation worker.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_service_context, run, spawn_worker};
pub use state::AppState;
