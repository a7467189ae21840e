// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! ONNX model tests against the real all-mpnet-base-v2 export
//!
//! Requires the model under ./models/all-mpnet-base-v2/ (model.onnx and
//! tokenizer.json). Run with `--ignored`.

use notelink_ai::embeddings::onnx_model::OnnxModelOptions;
use notelink_ai::embeddings::{
    cosine_similarity, EmbeddingModelConfig, EmbeddingModelManager, OnnxEmbeddingModel,
};
use notelink_ai::relation::{RelationService, RelationType};
use std::path::PathBuf;
use std::sync::Arc;

const MODEL_NAME: &str = "sentence-transformers/all-mpnet-base-v2";
const MODEL_PATH: &str = "./models/all-mpnet-base-v2/model.onnx";
const TOKENIZER_PATH: &str = "./models/all-mpnet-base-v2/tokenizer.json";

async fn load_model() -> OnnxEmbeddingModel {
    OnnxEmbeddingModel::new(
        MODEL_NAME,
        MODEL_PATH,
        TOKENIZER_PATH,
        OnnxModelOptions::default(),
    )
    .await
    .expect("Failed to load model")
}

#[tokio::test]
#[ignore] // Only run if model files are downloaded
async fn test_model_dimension() {
    let model = load_model().await;
    assert_eq!(model.dimension(), 768);
    assert_eq!(model.embed("Hello world").await.unwrap().len(), 768);
}

#[tokio::test]
#[ignore] // Only run if model files are downloaded
async fn test_embeddings_are_deterministic() {
    let model = load_model().await;
    let a = model.embed("Notes link to notes").await.unwrap();
    let b = model.embed("Notes link to notes").await.unwrap();

    let similarity = cosine_similarity(&a, &b).unwrap();
    assert!((similarity - 1.0).abs() < 1e-5);
}

#[tokio::test]
#[ignore] // Only run if model files are downloaded
async fn test_empty_and_long_inputs() {
    let model = load_model().await;
    assert_eq!(model.embed("").await.unwrap().len(), 768);

    // Truncated to max_sequence_length instead of overflowing the position table
    let long_text = "word ".repeat(5_000);
    assert_eq!(model.embed(&long_text).await.unwrap().len(), 768);
}

#[tokio::test]
#[ignore] // Only run if model files are downloaded
async fn test_related_sentences_score_higher() {
    let model = load_model().await;
    let cat = model.embed("The cat sits on the mat.").await.unwrap();
    let kitten = model.embed("A kitten is resting on a rug.").await.unwrap();
    let finance = model.embed("Quarterly revenue grew by ten percent.").await.unwrap();

    let close = cosine_similarity(&cat, &kitten).unwrap();
    let far = cosine_similarity(&cat, &finance).unwrap();
    assert!(close > far, "close {} vs far {}", close, far);
}

#[tokio::test]
#[ignore] // Only run if model files are downloaded
async fn test_manager_shares_model_between_services() {
    let models_dir = PathBuf::from("./models");
    let config = EmbeddingModelConfig {
        name: MODEL_NAME.to_string(),
        models_dir: Some(models_dir),
        options: OnnxModelOptions::default(),
    };

    let manager = EmbeddingModelManager::new(vec![config.clone(), config])
        .await
        .unwrap();
    assert_eq!(manager.model_count(), 1);

    let service = RelationService::new(manager.get_model(MODEL_NAME).unwrap());
    let relation = service
        .detect_relation("Rust prevents data races.", "Rust prevents data races.")
        .await
        .unwrap();
    assert_eq!(relation, Some(RelationType::Continuation));

    let shared: Arc<_> = manager.get_model(MODEL_NAME).unwrap();
    assert_eq!(shared.dimension(), 768);
}
