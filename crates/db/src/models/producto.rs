//! Product model and DTOs.
//!
//! Wire field names are the storefront's camelCase Spanish names
//! (`codProducto`, `nomPro`, ...); columns are snake_case.

use catalogo_core::types::DbId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `producto` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
    pub cod_producto: DbId,
    pub nom_pro: String,
    pub precio_producto: Decimal,
    pub stock_producto: i32,
}

/// DTO for creating a new product. All fields are required; the key is
/// assigned by the database.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProducto {
    pub nom_pro: String,
    pub precio_producto: Decimal,
    pub stock_producto: i32,
}

/// DTO for updating an existing product. All fields are optional; omitted
/// fields preserve their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProducto {
    pub nom_pro: Option<String>,
    pub precio_producto: Option<Decimal>,
    pub stock_producto: Option<i32>,
}
