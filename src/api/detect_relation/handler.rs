// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /detect-relation HTTP handler

use crate::api::detect_relation::{DetectRelationRequest, DetectRelationResponse};
use crate::api::http_server::AppState;
use crate::api::ApiError;
use axum::extract::State;
use axum::Json;
use axum_extra::extract::WithRejection;
use tracing::error;

/// POST /detect-relation handler
///
/// # Request Body
/// ```json
/// { "text1": "...", "text2": "..." }
/// ```
///
/// # Response Body
/// ```json
/// { "relation": "continuation" }
/// ```
/// `relation` is `"none"` when similarity is at or below the lowest threshold.
/// Any failure yields HTTP 500 `{"detail": "..."}`.
pub async fn detect_relation_handler(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<DetectRelationRequest>, ApiError>,
) -> Result<Json<DetectRelationResponse>, ApiError> {
    let relation = state
        .relation_service
        .detect_relation(&request.text1, &request.text2)
        .await
        .map_err(|e| {
            error!("Error in detect_relation: {:#}", e);
            ApiError::from(e)
        })?;

    Ok(Json(DetectRelationResponse::from(relation)))
}
