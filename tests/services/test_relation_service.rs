// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Relation service tests
//!
//! Drives `RelationService` with preset vectors so each similarity band
//! maps to a known label.

use crate::common::{unit_at, FailingEmbedder, MockEmbedder, TableEmbedder};
use notelink_ai::relation::{RelationService, RelationType};
use std::sync::Arc;

fn service_with_pairs(similarities: &[(&str, f32)]) -> RelationService {
    let mut entries = vec![("anchor".to_string(), vec![1.0, 0.0])];
    entries.extend(
        similarities
            .iter()
            .map(|(text, cos)| (text.to_string(), unit_at(*cos))),
    );
    RelationService::new(Arc::new(TableEmbedder::new(entries)))
}

#[tokio::test]
async fn test_similarity_bands() {
    let service = service_with_pairs(&[
        ("very close", 0.95),
        ("close", 0.7),
        ("loose", 0.5),
        ("far", 0.35),
        ("unrelated", 0.1),
        ("opposite", -0.9),
    ]);

    let cases = [
        ("very close", Some(RelationType::Continuation)),
        ("close", Some(RelationType::SharedContext)),
        ("loose", Some(RelationType::Analogy)),
        ("far", None),
        ("unrelated", None),
        ("opposite", None),
    ];

    for (text, expected) in cases {
        let relation = service.detect_relation("anchor", text).await.unwrap();
        assert_eq!(relation, expected, "anchor vs {}", text);
    }
}

#[tokio::test]
async fn test_identical_texts_are_continuation() {
    let service = service_with_pairs(&[("skewed", 0.3)]);

    for text in ["anchor", "skewed", "not in table", ""] {
        let relation = service.detect_relation(text, text).await.unwrap();
        assert_eq!(relation, Some(RelationType::Continuation), "text {:?}", text);
    }
}

#[tokio::test]
async fn test_each_call_embeds_both_texts() {
    let mut embedder = MockEmbedder::new();
    embedder
        .expect_embed()
        .times(4)
        .returning(|_| Ok(vec![0.5, 0.5, 0.0]));

    let service = RelationService::new(Arc::new(embedder));
    for _ in 0..2 {
        let relation = service.detect_relation("same", "same").await.unwrap();
        assert_eq!(relation, Some(RelationType::Continuation));
    }
}

#[tokio::test]
async fn test_embedding_failure_propagates() {
    let service = RelationService::new(Arc::new(FailingEmbedder));
    let err = service.detect_relation("a", "b").await.unwrap_err();
    assert!(err.to_string().contains("model crashed"));
}

#[tokio::test]
async fn test_mismatched_dimensions_are_an_error() {
    let service = RelationService::new(Arc::new(TableEmbedder::new([
        ("short", vec![1.0]),
        ("long", vec![1.0, 0.0, 0.0]),
    ])));

    let err = service.detect_relation("short", "long").await.unwrap_err();
    assert!(err.to_string().contains("Dimension mismatch"));
}
