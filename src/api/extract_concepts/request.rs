// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Request body for POST /extract-concepts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConceptsRequest {
    pub text: String,
}
