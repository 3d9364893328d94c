// HTTP handlers - thin orchestration layer
// Handlers only deal with HTTP concerns:
// 1. Decode the request, turning decode failures into 400s
// 2. Call domain logic
// 3. Read or write the receipt store
// 4. Shape the JSON response

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::config::ValidationMode;
use crate::domain;
use crate::models::{PointsResponse, ProcessReceiptResponse, Receipt};

/// POST /receipts/process
///
/// Scores the receipt and stores the points under a new random id.
/// Nothing is stored when the payload is rejected.
#[tracing::instrument(
    skip(state, body),
    fields(
        id = tracing::field::Empty,
        retailer = tracing::field::Empty
    )
)]
pub async fn process_receipt_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    // Decoded whatever the Content-Type header says
    let receipt: Receipt = serde_json::from_slice(&body)?;
    tracing::Span::current().record("retailer", receipt.retailer.as_str());

    if state.validation == ValidationMode::Strict {
        domain::validate_receipt(&receipt)?;
    }

    let breakdown = domain::score_breakdown(&receipt);
    let points = breakdown.points();
    debug!(?breakdown, "Receipt scored");

    let id = Uuid::new_v4().to_string();
    tracing::Span::current().record("id", id.as_str());
    state.store.put(&id, points).await?;

    info!(points = points, "Stored receipt");

    Ok(Json(ProcessReceiptResponse { id }))
}

/// GET /receipts/{id} and GET /receipts/{id}/points
#[tracing::instrument(skip(state, path))]
pub async fn get_points_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<PointsResponse>> {
    let Path(id) = path?;
    debug!(id = %id, "Retrieving points");

    let points = state.store.get(&id).await.inspect_err(|_| {
        info!(id = %id, "Receipt not found");
    })?;

    Ok(Json(PointsResponse { points }))
}

/// GET /receipts and GET /receipts/ - no id segment to look up
pub async fn missing_id_handler() -> ApiError {
    ApiError::BadRequest("Invalid URL path".to_string())
}

/// Path matched a route but not with this HTTP method
pub async fn method_not_allowed_handler() -> ApiError {
    ApiError::MethodNotAllowed("Method not allowed".to_string())
}

pub async fn health_check() -> &'static str {
    "OK"
}
