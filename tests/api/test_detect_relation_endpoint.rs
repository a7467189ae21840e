// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! POST /detect-relation endpoint tests

use crate::common::{state_with, unit_at, FailingEmbedder, TableEmbedder};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use notelink_ai::api::{create_app, DetectRelationResponse, ErrorResponse};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

fn app() -> Router {
    create_app(state_with(Arc::new(TableEmbedder::new([
        ("anchor", vec![1.0, 0.0]),
        ("related", unit_at(0.7)),
        ("unrelated", unit_at(0.2)),
    ]))))
}

fn post(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/detect-relation")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn read_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_returns_relation_label() {
    let response = app()
        .oneshot(post(r#"{"text1": "anchor", "text2": "related"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: DetectRelationResponse = read_json(response).await;
    assert_eq!(body.relation, "shared_context");
}

#[tokio::test]
async fn test_identical_texts_are_continuation() {
    let response = app()
        .oneshot(post(r#"{"text1": "same note", "text2": "same note"}"#))
        .await
        .unwrap();

    let body: DetectRelationResponse = read_json(response).await;
    assert_eq!(body.relation, "continuation");
}

#[tokio::test]
async fn test_low_similarity_returns_none_literal() {
    let response = app()
        .oneshot(post(r#"{"text1": "anchor", "text2": "unrelated"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = read_json(response).await;
    assert_eq!(body, serde_json::json!({ "relation": "none" }));
}

#[tokio::test]
async fn test_empty_texts_are_passed_through() {
    let response = app()
        .oneshot(post(r#"{"text1": "", "text2": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_model_failure_is_500_with_detail() {
    let app = create_app(state_with(Arc::new(FailingEmbedder)));
    let response = app
        .oneshot(post(r#"{"text1": "a", "text2": "b"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorResponse = read_json(response).await;
    assert!(body.detail.contains("model crashed"), "detail: {}", body.detail);
}

#[tokio::test]
async fn test_malformed_body_is_500_with_detail() {
    for body in [r#"{"text1": "only one"}"#, "not json", r#"{"text1": 1, "text2": 2}"#] {
        let response = app().oneshot(post(body)).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "body {:?}",
            body
        );
        let error: ErrorResponse = read_json(response).await;
        assert!(!error.detail.is_empty());
    }
}
