// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Sentence embeddings
//!
//! This module provides:
//! - `TextEmbedder`: the seam the relation and concept services embed through
//! - `OnnxEmbeddingModel`: ONNX Runtime + HuggingFace tokenizer implementation
//! - `EmbeddingModelManager`: loads each configured model once and shares it
//! - `cosine_similarity`: vector comparison used for relation detection

pub mod errors;
pub mod hub;
pub mod model_manager;
pub mod onnx_model;
pub mod similarity;

use anyhow::{Context, Result};
use async_trait::async_trait;

pub use errors::EmbeddingError;
pub use hub::{resolve_model_files, ModelFiles};
pub use model_manager::{EmbeddingModelConfig, EmbeddingModelManager, ModelInfo};
pub use onnx_model::OnnxEmbeddingModel;
pub use similarity::cosine_similarity;

/// Produces a fixed-dimension embedding vector for a text.
///
/// Implementations must be shareable across request handlers.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Embeds a single text. Empty strings are passed to the model as-is.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Output dimension of the vectors returned by `embed`.
    fn dimension(&self) -> usize;
}

/// Runs synchronous inference on tokio's blocking pool.
///
/// Async workers stay free to serve other requests while `task` runs or
/// waits on a model lock.
pub async fn run_blocking<F, T>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .context("Inference task panicked")?
}

#[async_trait]
impl TextEmbedder for OnnxEmbeddingModel {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        OnnxEmbeddingModel::embed(self, text).await
    }

    fn dimension(&self) -> usize {
        OnnxEmbeddingModel::dimension(self)
    }
}
