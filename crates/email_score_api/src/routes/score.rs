//! Single-address scoring route handlers
//!
//! Runs the full per-address pipeline: syntax, domain structure,
//! disposable and role detection, the pluggable probes, and weighted
//! scoring into a three-way verdict.

use crate::{
    api_handler::{check_input, convert_result, ApiResult, ScoreQuery, ScoreRequest, ScoreResponse},
    AppState,
};
use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// GET /v1/score?email=user@example.com
///
/// Scores one address. Malformed addresses are not errors: they come back
/// with all-false signals, score 0 and status `invalid`.
#[instrument(skip(state), fields(request_id))]
pub async fn score_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScoreQuery>,
) -> ApiResult<ScoreResponse> {
    score_one(&state, &query.email).await
}

/// POST /v1/score with `{"email": "user@example.com"}`
#[instrument(skip(state, request), fields(request_id))]
pub async fn score_post_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ScoreRequest>,
) -> ApiResult<ScoreResponse> {
    score_one(&state, &request.email).await
}

async fn score_one(state: &AppState, email: &str) -> ApiResult<ScoreResponse> {
    let request_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", &request_id);

    check_input(email)?;

    let result = state.pipeline.validate(email).await;

    info!(
        "Scored address: score={}, status={:?}",
        result.score, result.status
    );

    Ok(Json(convert_result(result, request_id)))
}
