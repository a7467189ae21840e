// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use lru::LruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;

/// Concept lists keyed by the exact input text
///
/// Unbounded unless a capacity is given, in which case the least recently
/// used entry is evicted first. Keys are not normalized.
pub struct ConceptCache {
    entries: Mutex<LruCache<String, Vec<String>>>,
    capacity: Option<NonZeroUsize>,
}

impl ConceptCache {
    pub fn unbounded() -> Self {
        Self {
            entries: Mutex::new(LruCache::unbounded()),
            capacity: None,
        }
    }

    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            capacity: Some(capacity),
        }
    }

    /// Unbounded for `None`, bounded otherwise
    pub fn with_capacity(capacity: Option<NonZeroUsize>) -> Self {
        match capacity {
            Some(capacity) => Self::bounded(capacity),
            None => Self::unbounded(),
        }
    }

    pub async fn get(&self, text: &str) -> Option<Vec<String>> {
        self.entries.lock().await.get(text).cloned()
    }

    pub async fn insert(&self, text: String, concepts: Vec<String>) {
        self.entries.lock().await.put(text, concepts);
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.capacity
    }
}

impl Default for ConceptCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
