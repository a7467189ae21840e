// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Concept API Module
//!
//! POST /extract-concepts: cached sentence fragments of a text.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::extract_concepts_handler;
pub use request::ExtractConceptsRequest;
pub use response::ExtractConceptsResponse;
