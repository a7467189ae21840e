// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Error types for embedding model loading and inference

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, loading, or running an embedding model
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Model or tokenizer file missing on disk
    #[error("{kind} file not found: {}", path.display())]
    FileNotFound { kind: &'static str, path: PathBuf },

    /// Download from the HuggingFace Hub failed
    #[error("Failed to download {file} from {repo}: {reason}")]
    DownloadFailed {
        repo: String,
        file: String,
        reason: String,
    },

    /// Tokenizer could not be loaded or failed to encode
    #[error("Tokenizer error: {0}")]
    Tokenizer(String),

    /// Model produced output of an unexpected shape
    #[error("Model outputs unexpected dimensions: {0:?} (expected [batch, seq_len, hidden])")]
    UnexpectedShape(Vec<usize>),

    /// Two vectors of different lengths were compared
    #[error("Dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Inference session lock poisoned by a panicking request
    #[error("Inference session unavailable: lock poisoned")]
    SessionPoisoned,
}
