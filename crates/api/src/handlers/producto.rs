//! Handlers for the product catalog.
//!
//! Five operations, each mapping one request to exactly one repository
//! call plus an existence check. No business rules beyond that.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use catalogo_core::error::CoreError;
use catalogo_core::types::DbId;
use catalogo_db::models::producto::{CreateProducto, UpdateProducto};
use catalogo_db::repositories::ProductoRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/productos
///
/// List all products in insertion order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let productos = ProductoRepo::list_all(&state.pool).await?;

    Ok(Json(productos))
}

/// GET /api/productos/{codProducto}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(cod_producto): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let producto = ProductoRepo::find_by_id(&state.pool, cod_producto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Producto",
            id: cod_producto,
        }))?;

    Ok(Json(producto))
}

/// POST /api/productos
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProducto>,
) -> AppResult<impl IntoResponse> {
    if input.nom_pro.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "nomPro must not be empty".into(),
        )));
    }

    let producto = ProductoRepo::create(&state.pool, &input).await?;

    tracing::info!(cod_producto = producto.cod_producto, "Producto created");

    Ok((StatusCode::CREATED, Json(producto)))
}

/// PUT /api/productos/{codProducto}
///
/// Partial update: omitted fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(cod_producto): Path<DbId>,
    Json(input): Json<UpdateProducto>,
) -> AppResult<impl IntoResponse> {
    if let Some(nom_pro) = &input.nom_pro {
        if nom_pro.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "nomPro must not be empty".into(),
            )));
        }
    }

    let modified = ProductoRepo::update(&state.pool, cod_producto, &input).await?;

    if modified == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Producto",
            id: cod_producto,
        }));
    }

    tracing::info!(cod_producto, "Producto updated");

    Ok(Json(MessageResponse {
        message: "Actualizado correctamente",
    }))
}

/// DELETE /api/productos/{codProducto}
pub async fn delete(
    State(state): State<AppState>,
    Path(cod_producto): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = ProductoRepo::delete(&state.pool, cod_producto).await?;

    if removed == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Producto",
            id: cod_producto,
        }));
    }

    tracing::info!(cod_producto, "Producto deleted");

    Ok(StatusCode::NO_CONTENT)
}
