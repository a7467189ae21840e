// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::concepts::ConceptCache;
use crate::embeddings::TextEmbedder;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Maximum number of concepts returned per text
pub const MAX_CONCEPTS: usize = 3;

/// Splits `text` on periods into at most `MAX_CONCEPTS` trimmed, non-empty
/// fragments, in their original order.
pub fn split_concepts(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .take(MAX_CONCEPTS)
        .map(str::to_string)
        .collect()
}

/// Extracts sentence fragments from texts, caching by exact input
pub struct ConceptService {
    embedder: Arc<dyn TextEmbedder>,
    cache: ConceptCache,
}

impl ConceptService {
    pub fn new(embedder: Arc<dyn TextEmbedder>, cache: ConceptCache) -> Self {
        Self { embedder, cache }
    }

    /// Returns the concepts for `text`, from the cache when present.
    ///
    /// On a miss the text is embedded before splitting. The embedding does not
    /// shape the result, but a failure aborts the call before anything is
    /// cached. The cache lock is not held while embedding.
    pub async fn extract_concepts(&self, text: &str) -> Result<Vec<String>> {
        if let Some(concepts) = self.cache.get(text).await {
            debug!("concept cache hit");
            return Ok(concepts);
        }

        // TODO: rank fragments by similarity to this embedding instead of discarding it
        let _embedding = self.embedder.embed(text).await?;

        let concepts = split_concepts(text);
        self.cache.insert(text.to_string(), concepts.clone()).await;
        debug!(count = concepts.len(), "concepts extracted");

        Ok(concepts)
    }

    pub async fn cache_len(&self) -> usize {
        self.cache.len().await
    }
}
