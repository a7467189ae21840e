// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod detect_relation;
pub mod errors;
pub mod extract_concepts;
pub mod http_server;

pub use detect_relation::{detect_relation_handler, DetectRelationRequest, DetectRelationResponse};
pub use errors::{ApiError, ErrorResponse};
pub use extract_concepts::{
    extract_concepts_handler, ExtractConceptsRequest, ExtractConceptsResponse,
};
pub use http_server::{create_app, start_server, AppState};
