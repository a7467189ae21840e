// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use notelink_ai::{
    api::{start_server, AppState},
    config::ServiceConfig,
    embeddings::EmbeddingModelManager,
    version,
};
use std::env;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("🚀 Starting notelink AI service {}", version::VERSION);

    let config = ServiceConfig::load().inspect_err(|e| error!("Invalid configuration: {:#}", e))?;

    info!("🧠 Initializing embedding models...");
    let models = EmbeddingModelManager::new(config.model_configs())
        .await
        .inspect_err(|e| error!("Error initializing AI services: {:#}", e))?;
    for model in models.list_models() {
        info!("   - {} ({}D)", model.name, model.dimensions);
    }

    let state = AppState::from_config(&config, &models)?;
    match config.concept_cache_capacity {
        Some(capacity) => info!("Concept cache bounded to {} entries (LRU)", capacity),
        None => info!("Concept cache unbounded"),
    }

    for endpoint in version::ENDPOINTS {
        info!("  {} on http://{}", endpoint, config.listen_addr);
    }

    start_server(config.listen_addr, state, shutdown_signal()).await?;

    info!("👋 Goodbye!");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("⏹️  Shutting down..."),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
