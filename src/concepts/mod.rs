// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Concept extraction: period-delimited fragments with an exact-text cache

pub mod cache;
pub mod service;

pub use cache::ConceptCache;
pub use service::{split_concepts, ConceptService, MAX_CONCEPTS};
