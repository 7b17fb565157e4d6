//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the contracted
//! status code and JSON body shape. They do NOT need an HTTP server -- they
//! call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use catalogo_api::error::AppError;
use catalogo_core::error::CoreError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with the fixed message body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404_with_fixed_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Producto",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "No encontrado");
    // The 404 body carries only the fixed message, not an error key.
    assert!(json.get("error").is_none());
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with the message under "error"
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("nomPro must not be empty".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "nomPro must not be empty");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 with the raw message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_with_raw_message() {
    let err = AppError::Core(CoreError::Internal("connection reset".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "connection reset");
}

// ---------------------------------------------------------------------------
// Test: store errors map to 500 carrying the underlying error text
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_with_error_text() {
    let err = AppError::Database(sqlx::Error::PoolClosed);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].is_string());
    assert!(!json["error"].as_str().unwrap().is_empty());
}
