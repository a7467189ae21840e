// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Shared test embedders
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use mockall::mock;
use notelink_ai::concepts::{ConceptCache, ConceptService};
use notelink_ai::embeddings::{run_blocking, TextEmbedder};
use notelink_ai::relation::RelationService;
use notelink_ai::AppState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

mock! {
    pub Embedder {}

    #[async_trait]
    impl TextEmbedder for Embedder {
        async fn embed(&self, text: &str) -> Result<Vec<f32>>;
        fn dimension(&self) -> usize;
    }
}

/// Unit vector whose cosine similarity with `[1.0, 0.0]` is `cos`
pub fn unit_at(cos: f32) -> Vec<f32> {
    vec![cos, (1.0 - cos * cos).max(0.0).sqrt()]
}

/// Embedder returning preset vectors; unknown texts embed to `[1.0, 0.0]`
pub struct TableEmbedder {
    vectors: HashMap<String, Vec<f32>>,
}

impl TableEmbedder {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        Self {
            vectors: entries
                .into_iter()
                .map(|(text, vector)| (text.into(), vector))
                .collect(),
        }
    }
}

#[async_trait]
impl TextEmbedder for TableEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![1.0, 0.0]))
    }

    fn dimension(&self) -> usize {
        2
    }
}

/// Embedder whose every call fails
pub struct FailingEmbedder;

#[async_trait]
impl TextEmbedder for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(anyhow!("model crashed"))
    }

    fn dimension(&self) -> usize {
        2
    }
}

/// Embedder shaped like the ONNX model: one locked session, blocking inference
pub struct SlowBlockingEmbedder {
    session: Arc<Mutex<()>>,
    delay: Duration,
}

impl SlowBlockingEmbedder {
    pub fn new(delay: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(())),
            delay,
        }
    }
}

#[async_trait]
impl TextEmbedder for SlowBlockingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        let session = Arc::clone(&self.session);
        let delay = self.delay;
        run_blocking(move || {
            let _guard = session.lock().map_err(|_| anyhow!("session poisoned"))?;
            std::thread::sleep(delay);
            Ok(vec![1.0, 0.0])
        })
        .await
    }

    fn dimension(&self) -> usize {
        2
    }
}

pub fn state_with(embedder: Arc<dyn TextEmbedder>) -> AppState {
    AppState::new(
        RelationService::new(embedder.clone()),
        ConceptService::new(embedder, ConceptCache::unbounded()),
    )
}
