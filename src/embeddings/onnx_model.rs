// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX Embedding Model Wrapper
//!
//! This module provides a wrapper around ONNX Runtime for running
//! sentence-transformers models exported to ONNX (all-mpnet-base-v2 by default).
//!
//! Features:
//! - ONNX model loading from disk
//! - Tokenization with truncation to the model's maximum sequence length
//! - Mean pooling over token embeddings, weighted by the attention mask
//! - Output dimension discovered from a validation inference at load time

use crate::embeddings::{run_blocking, EmbeddingError};
use anyhow::{Context, Result};
use ndarray::{Array2, Axis};
use ort::execution_providers::CPUExecutionProvider;
use ort::session::builder::GraphOptimizationLevel;
use ort::session::Session;
use ort::value::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info};

/// Load-time options for an ONNX embedding model
#[derive(Debug, Clone, Copy)]
pub struct OnnxModelOptions {
    /// Tokens beyond this length are truncated (384 for all-mpnet-base-v2)
    pub max_length: usize,
    /// ONNX Runtime intra-op thread count
    pub intra_threads: usize,
}

impl Default for OnnxModelOptions {
    fn default() -> Self {
        Self {
            max_length: 384,
            intra_threads: 4,
        }
    }
}

/// ONNX-based sentence embedding model
///
/// # Thread Safety
/// The session sits behind `Arc<Mutex>`; concurrent `embed` calls are
/// serialized on it inside the blocking pool, never on an async worker.
/// Clones share the same session and tokenizer.
#[derive(Clone)]
pub struct OnnxEmbeddingModel {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
    model_name: String,
    dimension: usize,
    max_length: usize,
    /// BERT exports take `token_type_ids`, MPNet exports do not
    uses_token_type_ids: bool,
}

impl std::fmt::Debug for OnnxEmbeddingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxEmbeddingModel")
            .field("model_name", &self.model_name)
            .field("dimension", &self.dimension)
            .field("max_length", &self.max_length)
            .finish_non_exhaustive()
    }
}

impl OnnxEmbeddingModel {
    /// Creates a new ONNX embedding model from disk paths
    ///
    /// # Errors
    /// Returns error if:
    /// - Model or tokenizer file not found or invalid
    /// - ONNX Runtime initialization fails
    /// - The validation inference does not produce `[batch, seq_len, hidden]`
    ///
    /// # Example
    /// ```ignore
    /// let model = OnnxEmbeddingModel::new(
    ///     "sentence-transformers/all-mpnet-base-v2",
    ///     "./models/all-mpnet-base-v2/model.onnx",
    ///     "./models/all-mpnet-base-v2/tokenizer.json",
    ///     OnnxModelOptions::default(),
    /// ).await?;
    /// ```
    pub async fn new<P: AsRef<Path>>(
        model_name: impl Into<String>,
        model_path: P,
        tokenizer_path: P,
        options: OnnxModelOptions,
    ) -> Result<Self> {
        let model_name = model_name.into();
        let model_path = model_path.as_ref();
        let tokenizer_path = tokenizer_path.as_ref();

        if !model_path.exists() {
            return Err(EmbeddingError::FileNotFound {
                kind: "ONNX model",
                path: model_path.to_path_buf(),
            }
            .into());
        }
        if !tokenizer_path.exists() {
            return Err(EmbeddingError::FileNotFound {
                kind: "Tokenizer",
                path: tokenizer_path.to_path_buf(),
            }
            .into());
        }

        info!("Initializing ONNX embedding model {}", model_name);
        let mut session = Session::builder()
            .context("Failed to create session builder")?
            .with_execution_providers([CPUExecutionProvider::default().build()])
            .context("Failed to set CPU execution provider")?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .context("Failed to set optimization level")?
            .with_intra_threads(options.intra_threads)
            .context("Failed to set intra threads")?
            .commit_from_file(model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        let uses_token_type_ids = session
            .inputs
            .iter()
            .any(|input| input.name == "token_type_ids");

        let mut tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| EmbeddingError::Tokenizer(format!("failed to load: {}", e)))?;
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: options.max_length,
                ..Default::default()
            }))
            .map_err(|e| EmbeddingError::Tokenizer(format!("failed to set truncation: {}", e)))?;

        // Validation inference also tells us the hidden size
        let validation = run_pooled(&mut session, &tokenizer, "validation test", uses_token_type_ids)?;
        let dimension = validation.len();

        info!(
            "✅ ONNX embedding model {} loaded ({} dimensions, token_type_ids: {})",
            model_name, dimension, uses_token_type_ids
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
            model_name,
            dimension,
            max_length: options.max_length,
            uses_token_type_ids,
        })
    }

    /// Generates a mean-pooled embedding for a single text
    ///
    /// Tokenization, inference and pooling run on the blocking pool.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let session = Arc::clone(&self.session);
        let tokenizer = Arc::clone(&self.tokenizer);
        let uses_token_type_ids = self.uses_token_type_ids;
        let text = text.to_owned();

        let embedding = run_blocking(move || {
            let mut session = session
                .lock()
                .map_err(|_| EmbeddingError::SessionPoisoned)?;
            run_pooled(&mut session, &tokenizer, &text, uses_token_type_ids)
        })
        .await?;

        if embedding.len() != self.dimension {
            return Err(EmbeddingError::DimensionMismatch {
                left: embedding.len(),
                right: self.dimension,
            }
            .into());
        }

        Ok(embedding)
    }

    /// Returns the output dimension of this model
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the model name
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the truncation length applied by the tokenizer
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

/// Tokenizes `text`, runs the session and mean-pools the token embeddings.
fn run_pooled(
    session: &mut Session,
    tokenizer: &Tokenizer,
    text: &str,
    uses_token_type_ids: bool,
) -> Result<Vec<f32>> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| EmbeddingError::Tokenizer(format!("encoding failed: {}", e)))?;

    let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
    let attention_mask: Vec<i64> = encoding
        .get_attention_mask()
        .iter()
        .map(|&m| m as i64)
        .collect();
    let seq_len = input_ids.len();
    debug!("Encoded {} tokens", seq_len);

    let mask_weights: Vec<f32> = attention_mask.iter().map(|&m| m as f32).collect();

    let input_ids_array = Array2::from_shape_vec((1, seq_len), input_ids)
        .context("Failed to create input_ids array")?;
    let attention_mask_array = Array2::from_shape_vec((1, seq_len), attention_mask)
        .context("Failed to create attention_mask array")?;

    let outputs = if uses_token_type_ids {
        let token_type_ids_array = Array2::<i64>::zeros((1, seq_len));
        session.run(ort::inputs![
            "input_ids" => Value::from_array(input_ids_array)?,
            "attention_mask" => Value::from_array(attention_mask_array)?,
            "token_type_ids" => Value::from_array(token_type_ids_array)?
        ])?
    } else {
        session.run(ort::inputs![
            "input_ids" => Value::from_array(input_ids_array)?,
            "attention_mask" => Value::from_array(attention_mask_array)?
        ])?
    };

    // Output names differ between exports; the token embeddings come first
    let output_array = outputs[0]
        .try_extract_array::<f32>()
        .context("Failed to extract output tensor")?;
    let shape = output_array.shape().to_vec();
    if shape.len() != 3 || shape[1] != seq_len {
        return Err(EmbeddingError::UnexpectedShape(shape).into());
    }

    let tokens = output_array.index_axis(Axis(0), 0); // [seq_len, hidden]
    Ok(mean_pool(
        tokens
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().collect()),
        &mask_weights,
        shape[2],
    ))
}

/// Averages token vectors weighted by the attention mask.
fn mean_pool<I>(token_rows: I, mask: &[f32], hidden: usize) -> Vec<f32>
where
    I: IntoIterator<Item = Vec<f32>>,
{
    let mut pooled = vec![0.0f32; hidden];
    let mut sum_mask = 0.0f32;

    for (row, &weight) in token_rows.into_iter().zip(mask) {
        sum_mask += weight;
        for (acc, value) in pooled.iter_mut().zip(row) {
            *acc += value * weight;
        }
    }

    for value in &mut pooled {
        *value /= sum_mask.max(1e-9);
    }
    pooled
}
