// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding Model Manager
//!
//! Loads every distinct configured embedding model once, in parallel, and
//! hands out shared handles. The relation and concept services each ask for
//! their configured model by name; when both name the same model they share
//! one session.

use crate::embeddings::onnx_model::OnnxModelOptions;
use crate::embeddings::{resolve_model_files, OnnxEmbeddingModel, TextEmbedder};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Configuration for loading an embedding model
#[derive(Debug, Clone)]
pub struct EmbeddingModelConfig {
    /// Model name, also the HuggingFace Hub repo id
    /// (e.g., "sentence-transformers/all-mpnet-base-v2")
    pub name: String,
    /// Local models directory; `None` downloads from the Hub
    pub models_dir: Option<PathBuf>,
    /// Tokenizer and runtime options
    pub options: OnnxModelOptions,
}

/// Information about a loaded embedding model
#[derive(Debug, Clone, serde::Serialize)]
pub struct ModelInfo {
    pub name: String,
    pub dimensions: usize,
}

/// Manager for shared embedding models
#[derive(Clone)]
pub struct EmbeddingModelManager {
    models: HashMap<String, Arc<dyn TextEmbedder>>,
}

impl std::fmt::Debug for EmbeddingModelManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingModelManager")
            .field("models", &self.models.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl EmbeddingModelManager {
    /// Loads all configured models in parallel
    ///
    /// Configs naming the same model are loaded once. Unlike optional
    /// features, these models back every route, so any load failure is
    /// returned as an error.
    pub async fn new(configs: Vec<EmbeddingModelConfig>) -> Result<Self> {
        if configs.is_empty() {
            anyhow::bail!("No model configurations provided");
        }

        let mut unique: HashMap<String, EmbeddingModelConfig> = HashMap::new();
        for config in configs {
            unique.entry(config.name.clone()).or_insert(config);
        }

        info!("Loading {} embedding models in parallel", unique.len());

        let mut load_tasks = Vec::with_capacity(unique.len());
        for (_, config) in unique {
            load_tasks.push(tokio::spawn(async move {
                let model_name = config.name.clone();
                let result = load_model(config).await;
                match &result {
                    Ok(model) => info!(
                        "✓ Successfully loaded model: {} ({} dimensions)",
                        model_name,
                        model.dimension()
                    ),
                    Err(e) => error!("✗ Failed to load model {}: {:#}", model_name, e),
                }
                result.map(|model| (model_name, model))
            }));
        }

        let mut models: HashMap<String, Arc<dyn TextEmbedder>> = HashMap::new();
        for task in load_tasks {
            let (name, model) = task.await.context("Model loading task panicked")??;
            models.insert(name, Arc::new(model));
        }

        Ok(Self { models })
    }

    /// Builds a manager around already constructed embedders
    pub fn from_models<I>(models: I) -> Self
    where
        I: IntoIterator<Item = (String, Arc<dyn TextEmbedder>)>,
    {
        Self {
            models: models.into_iter().collect(),
        }
    }

    /// Gets a model by name
    pub fn get_model(&self, name: &str) -> Result<Arc<dyn TextEmbedder>> {
        self.models
            .get(name)
            .cloned()
            .with_context(|| format!("Model not found: {}", name))
    }

    /// Lists all loaded models, sorted by name
    pub fn list_models(&self) -> Vec<ModelInfo> {
        let mut models: Vec<ModelInfo> = self
            .models
            .iter()
            .map(|(name, model)| ModelInfo {
                name: name.clone(),
                dimensions: model.dimension(),
            })
            .collect();

        models.sort_by(|a, b| a.name.cmp(&b.name));
        models
    }

    /// Returns the number of loaded models
    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

async fn load_model(config: EmbeddingModelConfig) -> Result<OnnxEmbeddingModel> {
    let files = resolve_model_files(&config.name, config.models_dir.as_deref()).await?;
    OnnxEmbeddingModel::new(
        config.name,
        files.model_path,
        files.tokenizer_path,
        config.options,
    )
    .await
}
