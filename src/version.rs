// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the notelink AI service

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-relations-and-concepts";

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Endpoints served by this version
pub const ENDPOINTS: &[&str] = &["POST /detect-relation", "POST /extract-concepts"];
