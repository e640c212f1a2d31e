mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use colonization_dashboard::run_pipeline;
use colonization_dashboard::server::{create_server, AppState};
use serde_json::Value;
use std::sync::Arc;
use tempfile::tempdir;
use tower::ServiceExt;

fn app() -> (axum::Router, String) {
    let data = run_pipeline(&common::bundled_data_dir()).unwrap();
    let state = AppState::from_prepared(&data).unwrap();
    let fingerprint = state.fingerprint.clone();
    let assets = tempdir().unwrap();
    (create_server(Arc::new(state), assets.path()), fingerprint)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_fingerprint() {
    let (app, fingerprint) = app();
    let (status, body) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["fingerprint"], Value::String(fingerprint));
}

#[tokio::test]
async fn dashboard_endpoint_serves_six_sections() {
    let (app, fingerprint) = app();
    let (status, body) = get_json(app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sections"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["data_fingerprint"], Value::String(fingerprint));
}

#[tokio::test]
async fn tables_endpoint_serves_prepared_data() {
    let (app, _) = app();
    let (status, body) = get_json(app, "/api/tables").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["flows"]["nodes"].as_array().is_some_and(|n| !n.is_empty()));
    assert!(body["attention"][0]["Attention_Index"].is_number());
}

#[tokio::test]
async fn index_serves_page_shell() {
    let (app, _) = app();
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<title>Digital Colonization Narrative</title>"));
    assert!(html.contains("/api/dashboard"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (app, _) = app();
    let response = app
        .oneshot(Request::builder().uri("/admin").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
