use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalogo_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Implements [`IntoResponse`] to produce the fixed JSON error
/// contract:
///
/// - missing resources: `404 {"message": "No encontrado"}`
/// - validation: `400 {"error": <message>}`
/// - everything else: `500 {"error": <message>}` with the raw error text
///   (internal/demo-grade service, no sanitization).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `catalogo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = *entity, id = *id, "Resource not found");
                    (
                        StatusCode::NOT_FOUND,
                        json!({ "message": "No encontrado" }),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, json!({ "error": msg }))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
                }
            },
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string() }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
