// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use crate::embeddings::EmbeddingError;

/// Norm product floor, matching torch's `cosine_similarity` eps
const EPSILON: f32 = 1e-8;

/// Cosine similarity of two embeddings, in [-1, 1].
///
/// A zero vector on either side yields 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, EmbeddingError> {
    if a.len() != b.len() {
        return Err(EmbeddingError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    Ok((dot / (norm_a * norm_b).max(EPSILON)).clamp(-1.0, 1.0))
}
