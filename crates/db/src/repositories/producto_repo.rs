//! Repository for the `producto` table.

use catalogo_core::types::DbId;
use sqlx::PgPool;

use crate::models::producto::{CreateProducto, Producto, UpdateProducto};

const COLUMNS: &str = "cod_producto, nom_pro, precio_producto, stock_producto";

/// Provides keyed CRUD operations for products.
pub struct ProductoRepo;

impl ProductoRepo {
    /// List all products in insertion order. An empty table yields an empty
    /// vec, never an error.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Producto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM producto ORDER BY cod_producto ASC");
        sqlx::query_as::<_, Producto>(&query).fetch_all(pool).await
    }

    /// Find a product by its key. A missing key yields `None`.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Producto>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM producto WHERE cod_producto = $1");
        sqlx::query_as::<_, Producto>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning the stored row with its assigned key.
    pub async fn create(pool: &PgPool, input: &CreateProducto) -> Result<Producto, sqlx::Error> {
        let query = format!(
            "INSERT INTO producto (nom_pro, precio_producto, stock_producto) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Producto>(&query)
            .bind(&input.nom_pro)
            .bind(input.precio_producto)
            .bind(input.stock_producto)
            .fetch_one(pool)
            .await
    }

    /// Update a product. Only non-`None` fields are applied; omitted fields
    /// keep their stored values. Returns the number of rows modified (0 or 1).
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProducto,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE producto SET \
                nom_pro = COALESCE($2, nom_pro), \
                precio_producto = COALESCE($3, precio_producto), \
                stock_producto = COALESCE($4, stock_producto) \
             WHERE cod_producto = $1",
        )
        .bind(id)
        .bind(&input.nom_pro)
        .bind(input.precio_producto)
        .bind(input.stock_producto)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a product by key. Returns the number of rows removed (0 or 1).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM producto WHERE cod_producto = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
