// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};

/// Response body for POST /extract-concepts
///
/// # Example
/// ```json
/// { "concepts": ["Ownership", "Borrowing", "Lifetimes"] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractConceptsResponse {
    /// Zero to three fragments, in input order
    pub concepts: Vec<String>,
}

impl From<Vec<String>> for ExtractConceptsResponse {
    fn from(concepts: Vec<String>) -> Self {
        Self { concepts }
    }
}
