//! Health check and monitoring routes
//!
//! Endpoints for service health checks, readiness probes and monitoring
//! metrics.

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use email_score::Status;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: std::time::SystemTime,
}

/// Health check endpoint - GET /health
///
/// Simple health check to verify the API is running.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: std::time::SystemTime::now(),
    })
}

/// Readiness response
#[derive(Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub timestamp: std::time::SystemTime,
}

/// Readiness check endpoint - GET /ready
///
/// Runs a known-bad address through the pipeline; if it does not come back
/// `invalid` the pipeline is in a broken state.
pub async fn ready_handler(State(state): State<Arc<AppState>>) -> Json<ReadinessResponse> {
    let result = state.pipeline.validate("not-an-address").await;
    let is_ready = result.status == Status::Invalid && result.score == 0;
    if !is_ready {
        warn!("Readiness check failed: unexpected result {:?}", result);
    }

    Json(ReadinessResponse {
        ready: is_ready,
        timestamp: std::time::SystemTime::now(),
    })
}

/// Metrics endpoint - GET /metrics
///
/// Returns Prometheus-compatible metrics for monitoring.
pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> (StatusCode, String) {
    let stats = state.pipeline.stats();

    let metrics = format!(
        "# HELP email_score_disposable_domains_total Total number of domains on the disposable deny-list\n\
         # TYPE email_score_disposable_domains_total gauge\n\
         email_score_disposable_domains_total {}\n\
         \n\
         # HELP email_score_role_prefixes_total Total number of role-account prefixes\n\
         # TYPE email_score_role_prefixes_total gauge\n\
         email_score_role_prefixes_total {}\n\
         \n\
         # HELP email_score_build_info Build information\n\
         # TYPE email_score_build_info gauge\n\
         email_score_build_info{{version=\"{}\"}} 1\n",
        stats.disposable_domains_count,
        stats.role_prefixes_count,
        env!("CARGO_PKG_VERSION")
    );

    (StatusCode::OK, metrics)
}

/// Statistics response
#[derive(Serialize)]
pub struct StatsResponse {
    pub version: String,
    pub pipeline_stats: email_score::pipeline::PipelineStats,
    pub timestamp: std::time::SystemTime,
}

/// Statistics endpoint - GET /admin/stats
///
/// Returns detailed statistics about the scoring pipeline.
pub async fn stats_handler(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        pipeline_stats: state.pipeline.stats(),
        timestamp: std::time::SystemTime::now(),
    })
}
