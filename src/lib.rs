// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod concepts;
pub mod config;
pub mod embeddings;
pub mod relation;
pub mod version;

pub use api::{create_app, start_server, AppState};
pub use concepts::{ConceptCache, ConceptService};
pub use config::ServiceConfig;
pub use embeddings::{EmbeddingModelManager, TextEmbedder};
pub use relation::{RelationService, RelationType};
