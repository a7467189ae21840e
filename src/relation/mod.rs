// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Relation detection between note texts

pub mod service;
pub mod types;

pub use service::{classify_similarity, RelationService};
pub use types::{RelationType, UnknownRelationType};
