// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Relation API Module
//!
//! POST /detect-relation: relation label between two texts.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::detect_relation_handler;
pub use request::DetectRelationRequest;
pub use response::{DetectRelationResponse, NO_RELATION};
