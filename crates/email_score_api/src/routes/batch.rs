//! Bulk scoring route handler
//!
//! The core exposes no batching primitive; this handler loops the
//! single-address entry point. One bad address never aborts the batch:
//! `validate` is infallible and resolves malformed input to an `invalid`
//! result.

use crate::{
    api_handler::{
        convert_batch_entry, ApiError, ApiResult, BatchScoreRequest, BatchScoreResponse,
    },
    AppState,
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

/// POST /v1/score/batch with `{"emails": ["a@x.com", "b@y.com"]}`
///
/// Returns one result per address, in request order. Batch size is capped
/// by `server.max_batch_size`.
#[instrument(skip(state, request), fields(request_id, batch_size))]
pub async fn batch_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BatchScoreRequest>,
) -> ApiResult<BatchScoreResponse> {
    let request_id = Uuid::new_v4().to_string();
    tracing::Span::current().record("request_id", &request_id);
    tracing::Span::current().record("batch_size", request.emails.len());

    if request.emails.is_empty() {
        return Err(ApiError::InvalidInput("Batch cannot be empty".to_string()));
    }

    let max = state.config.server.max_batch_size;
    if request.emails.len() > max {
        return Err(ApiError::BatchTooLarge(max));
    }

    let mut results = Vec::with_capacity(request.emails.len());
    for email in &request.emails {
        let result = state.pipeline.validate(email).await;
        results.push(convert_batch_entry(result));
    }

    info!("Scored batch of {} addresses", results.len());

    Ok(Json(BatchScoreResponse {
        request_id,
        results,
        checked_at: chrono::Utc::now().to_rfc3339(),
    }))
}
