// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{detect_relation_handler, extract_concepts_handler};
use crate::concepts::{ConceptCache, ConceptService};
use crate::config::ServiceConfig;
use crate::embeddings::EmbeddingModelManager;
use crate::relation::RelationService;

/// Shared handler state: one instance of each service for the process lifetime
#[derive(Clone)]
pub struct AppState {
    pub relation_service: Arc<RelationService>,
    pub concept_service: Arc<ConceptService>,
}

impl AppState {
    pub fn new(relation_service: RelationService, concept_service: ConceptService) -> Self {
        Self {
            relation_service: Arc::new(relation_service),
            concept_service: Arc::new(concept_service),
        }
    }

    /// Wires both services to the models named in `config`
    pub fn from_config(
        config: &ServiceConfig,
        models: &EmbeddingModelManager,
    ) -> anyhow::Result<Self> {
        let relation_model = models.get_model(&config.relation_model.name)?;
        let concept_model = models.get_model(&config.concept_model.name)?;

        Ok(Self::new(
            RelationService::new(relation_model),
            ConceptService::new(
                concept_model,
                ConceptCache::with_capacity(config.concept_cache_capacity),
            ),
        ))
    }
}

/// Builds the router with both routes
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/detect-relation", post(detect_relation_handler))
        .route("/extract-concepts", post(extract_concepts_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `state` on `addr` until `shutdown` resolves
pub async fn start_server<F>(addr: SocketAddr, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
