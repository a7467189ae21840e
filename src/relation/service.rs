// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::embeddings::{cosine_similarity, TextEmbedder};
use crate::relation::RelationType;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Similarity above which two texts are a continuation
pub const CONTINUATION_THRESHOLD: f64 = 0.8;
/// Similarity above which two texts share context
pub const SHARED_CONTEXT_THRESHOLD: f64 = 0.6;
/// Similarity above which two texts are an analogy
pub const ANALOGY_THRESHOLD: f64 = 0.4;

/// Maps a cosine similarity onto a relation label.
///
/// Thresholds are strict; `None` means no relation. The comparison is done
/// in `f64` so `0.8f32` (slightly above 0.8) lands in the upper band.
pub fn classify_similarity(similarity: f32) -> Option<RelationType> {
    let similarity = f64::from(similarity);
    if similarity > CONTINUATION_THRESHOLD {
        Some(RelationType::Continuation)
    } else if similarity > SHARED_CONTEXT_THRESHOLD {
        Some(RelationType::SharedContext)
    } else if similarity > ANALOGY_THRESHOLD {
        Some(RelationType::Analogy)
    } else {
        None
    }
}

/// Detects relations between pairs of texts from embedding similarity
#[derive(Clone)]
pub struct RelationService {
    embedder: Arc<dyn TextEmbedder>,
}

impl RelationService {
    pub fn new(embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { embedder }
    }

    /// Embeds both texts and classifies their cosine similarity.
    ///
    /// Results are not cached; every call embeds both texts.
    pub async fn detect_relation(&self, text1: &str, text2: &str) -> Result<Option<RelationType>> {
        let embedding1 = self.embedder.embed(text1).await?;
        let embedding2 = self.embedder.embed(text2).await?;

        let similarity = cosine_similarity(&embedding1, &embedding2)?;
        let relation = classify_similarity(similarity);
        debug!(similarity, ?relation, "relation detected");

        Ok(relation)
    }
}
