// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Model file resolution
//!
//! Embedding models are either read from a local models directory laid out as
//! `<models_dir>/<model-name>/{model.onnx,tokenizer.json}` or fetched from the
//! HuggingFace Hub (and cached there by `hf-hub`).

use crate::embeddings::EmbeddingError;
use hf_hub::api::tokio::Api;
use std::path::{Path, PathBuf};
use tracing::info;

/// Path of the ONNX export inside a sentence-transformers Hub repo
pub const HUB_MODEL_FILE: &str = "onnx/model.onnx";
/// Path of the tokenizer inside a sentence-transformers Hub repo
pub const HUB_TOKENIZER_FILE: &str = "tokenizer.json";

const LOCAL_MODEL_FILE: &str = "model.onnx";
const LOCAL_TOKENIZER_FILE: &str = "tokenizer.json";

/// On-disk location of one model's files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelFiles {
    pub model_path: PathBuf,
    pub tokenizer_path: PathBuf,
}

/// Directory name used for a model inside a local models directory.
///
/// `sentence-transformers/all-mpnet-base-v2` maps to `all-mpnet-base-v2`.
pub fn local_model_dir_name(model_name: &str) -> &str {
    model_name.rsplit('/').next().unwrap_or(model_name)
}

/// Resolves the model and tokenizer files for `model_name`.
///
/// With `models_dir` set, only the local directory is consulted and missing
/// files are an error. Without it, the files are downloaded from the Hub.
pub async fn resolve_model_files(
    model_name: &str,
    models_dir: Option<&Path>,
) -> Result<ModelFiles, EmbeddingError> {
    match models_dir {
        Some(dir) => resolve_local(model_name, dir),
        None => download_from_hub(model_name).await,
    }
}

fn resolve_local(model_name: &str, models_dir: &Path) -> Result<ModelFiles, EmbeddingError> {
    let dir = models_dir.join(local_model_dir_name(model_name));
    let files = ModelFiles {
        model_path: dir.join(LOCAL_MODEL_FILE),
        tokenizer_path: dir.join(LOCAL_TOKENIZER_FILE),
    };

    if !files.model_path.exists() {
        return Err(EmbeddingError::FileNotFound {
            kind: "ONNX model",
            path: files.model_path,
        });
    }
    if !files.tokenizer_path.exists() {
        return Err(EmbeddingError::FileNotFound {
            kind: "Tokenizer",
            path: files.tokenizer_path,
        });
    }

    info!("Using local model files from {}", dir.display());
    Ok(files)
}

async fn download_from_hub(model_name: &str) -> Result<ModelFiles, EmbeddingError> {
    let download_error = |file: &str, reason: String| EmbeddingError::DownloadFailed {
        repo: model_name.to_string(),
        file: file.to_string(),
        reason,
    };

    let api = Api::new().map_err(|e| download_error(HUB_MODEL_FILE, e.to_string()))?;
    let repo = api.model(model_name.to_string());

    info!("Fetching {} from HuggingFace Hub", model_name);
    let model_path = repo
        .get(HUB_MODEL_FILE)
        .await
        .map_err(|e| download_error(HUB_MODEL_FILE, e.to_string()))?;
    let tokenizer_path = repo
        .get(HUB_TOKENIZER_FILE)
        .await
        .map_err(|e| download_error(HUB_TOKENIZER_FILE, e.to_string()))?;

    Ok(ModelFiles {
        model_path,
        tokenizer_path,
    })
}
