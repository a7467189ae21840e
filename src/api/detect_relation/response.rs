// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::relation::RelationType;
use serde::{Deserialize, Serialize};

/// Literal returned when no relation was detected
pub const NO_RELATION: &str = "none";

/// Response body for POST /detect-relation
///
/// `relation` is one of the relation labels or `"none"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectRelationResponse {
    pub relation: String,
}

impl From<Option<RelationType>> for DetectRelationResponse {
    fn from(relation: Option<RelationType>) -> Self {
        Self {
            relation: relation
                .map(|r| r.as_str())
                .unwrap_or(NO_RELATION)
                .to_string(),
        }
    }
}
