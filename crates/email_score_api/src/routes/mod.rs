//! API Routes Module
//!
//! Endpoint groups:
//! - `score`: single-address scoring (GET and POST)
//! - `batch`: bulk scoring with per-address fail-safety
//! - `health`: health checks and monitoring endpoints

pub mod batch;
pub mod health;
pub mod score;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Build all API routes and return a configured Router
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Scoring endpoints
        .route("/v1/score", get(score::score_handler).post(score::score_post_handler))
        .route("/v1/score/batch", post(batch::batch_handler))
        // Health and monitoring endpoints
        .route("/health", get(health::health_handler))
        .route("/ready", get(health::ready_handler))
        .route("/metrics", get(health::metrics_handler))
        // Administrative endpoints
        .route("/admin/stats", get(health::stats_handler))
        // Apply shared state to all routes
        .with_state(state)
}

/// API version information
#[allow(dead_code)]
pub const API_VERSION: &str = "v1";
