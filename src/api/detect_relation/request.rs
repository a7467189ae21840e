// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Request body for POST /detect-relation
///
/// # Example
/// ```json
/// { "text1": "Rust has ownership.", "text2": "Ownership prevents data races." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRelationRequest {
    pub text1: String,
    pub text2: String,
}
