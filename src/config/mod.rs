// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Service configuration
//!
//! Every setting is a CLI flag with an environment variable fallback. `.env`
//! is loaded before parsing. Defaults reproduce the stock deployment:
//! listen on `0.0.0.0:5001`, both services on all-mpnet-base-v2, unbounded
//! concept cache.

use crate::embeddings::onnx_model::OnnxModelOptions;
use crate::embeddings::EmbeddingModelConfig;
use anyhow::{bail, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_MODEL: &str = "sentence-transformers/all-mpnet-base-v2";

/// Note relation and concept extraction service
#[derive(Parser, Debug, Clone)]
#[command(name = "notelink-ai")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Relation detection and concept extraction over sentence embeddings", long_about = None)]
pub struct Cli {
    /// Interface to bind
    #[arg(long, env = "NOTELINK_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "NOTELINK_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Embedding model used for relation detection
    #[arg(long, env = "RELATION_MODEL", default_value = DEFAULT_MODEL)]
    pub relation_model: String,

    /// Embedding model used for concept extraction
    #[arg(long, env = "CONCEPT_MODEL", default_value = DEFAULT_MODEL)]
    pub concept_model: String,

    /// Directory holding <model>/model.onnx and <model>/tokenizer.json.
    /// When unset, models are downloaded from the HuggingFace Hub.
    #[arg(long, env = "MODELS_DIR")]
    pub models_dir: Option<PathBuf>,

    /// Token limit per input; longer inputs are truncated
    #[arg(long, env = "MAX_SEQUENCE_LENGTH", default_value_t = 384)]
    pub max_sequence_length: usize,

    /// ONNX Runtime intra-op threads
    #[arg(long, env = "ORT_INTRA_THREADS", default_value_t = 4)]
    pub intra_threads: usize,

    /// Bound the concept cache (LRU eviction). Unbounded when unset.
    #[arg(long, env = "CONCEPT_CACHE_CAPACITY")]
    pub concept_cache_capacity: Option<NonZeroUsize>,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    pub relation_model: EmbeddingModelConfig,
    pub concept_model: EmbeddingModelConfig,
    pub concept_cache_capacity: Option<NonZeroUsize>,
}

impl ServiceConfig {
    /// Loads `.env`, then parses flags and environment
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.max_sequence_length == 0 {
            bail!("max_sequence_length must be greater than 0");
        }
        if cli.intra_threads == 0 {
            bail!("intra_threads must be greater than 0");
        }
        if cli.relation_model.trim().is_empty() || cli.concept_model.trim().is_empty() {
            bail!("model name cannot be empty");
        }

        let listen_addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid listen address {}:{}: {}", cli.host, cli.port, e))?;

        let options = OnnxModelOptions {
            max_length: cli.max_sequence_length,
            intra_threads: cli.intra_threads,
        };
        let model_config = |name: String| EmbeddingModelConfig {
            name,
            models_dir: cli.models_dir.clone(),
            options,
        };

        Ok(Self {
            listen_addr,
            relation_model: model_config(cli.relation_model.clone()),
            concept_model: model_config(cli.concept_model.clone()),
            concept_cache_capacity: cli.concept_cache_capacity,
        })
    }

    /// Model configs for the manager; duplicates are loaded once
    pub fn model_configs(&self) -> Vec<EmbeddingModelConfig> {
        vec![self.relation_model.clone(), self.concept_model.clone()]
    }
}
