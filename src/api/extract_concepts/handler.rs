// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /extract-concepts HTTP handler

use crate::api::extract_concepts::{ExtractConceptsRequest, ExtractConceptsResponse};
use crate::api::http_server::AppState;
use crate::api::ApiError;
use axum::extract::State;
use axum::Json;
use axum_extra::extract::WithRejection;
use tracing::error;

/// POST /extract-concepts handler
///
/// Returns up to three period-delimited fragments of `text`. Repeated texts are
/// answered from the concept cache.
pub async fn extract_concepts_handler(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<ExtractConceptsRequest>, ApiError>,
) -> Result<Json<ExtractConceptsResponse>, ApiError> {
    let concepts = state
        .concept_service
        .extract_concepts(&request.text)
        .await
        .map_err(|e| {
            error!("Error in extract_concepts: {:#}", e);
            ApiError::from(e)
        })?;

    Ok(Json(ExtractConceptsResponse::from(concepts)))
}
