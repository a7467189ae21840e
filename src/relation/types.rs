// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relation between two note texts
///
/// Only `Continuation`, `SharedContext` and `Analogy` are produced by the
/// similarity thresholds. The remaining tags are part of the published label
/// set but no detection path emits them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    Continuation,
    Contradiction,
    Example,
    Prerequisite,
    Analogy,
    SharedContext,
}

impl RelationType {
    /// Every declared label, in published order
    pub const ALL: [RelationType; 6] = [
        RelationType::Continuation,
        RelationType::Contradiction,
        RelationType::Example,
        RelationType::Prerequisite,
        RelationType::Analogy,
        RelationType::SharedContext,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Continuation => "continuation",
            RelationType::Contradiction => "contradiction",
            RelationType::Example => "example",
            RelationType::Prerequisite => "prerequisite",
            RelationType::Analogy => "analogy",
            RelationType::SharedContext => "shared_context",
        }
    }

    /// Whether the similarity thresholds can ever produce this label
    pub fn is_reachable(&self) -> bool {
        matches!(
            self,
            RelationType::Continuation | RelationType::SharedContext | RelationType::Analogy
        )
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a string that names no relation label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown relation type: {0}")]
pub struct UnknownRelationType(pub String);

impl FromStr for RelationType {
    type Err = UnknownRelationType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationType::ALL
            .into_iter()
            .find(|relation| relation.as_str() == s)
            .ok_or_else(|| UnknownRelationType(s.to_string()))
    }
}
