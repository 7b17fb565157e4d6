//! Route definitions for products.

use axum::routing::get;
use axum::Router;

use crate::handlers::producto;
use crate::state::AppState;

/// Routes mounted at `/productos`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{codProducto}     -> get_by_id
/// PUT    /{codProducto}     -> update
/// DELETE /{codProducto}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(producto::list).post(producto::create))
        .route(
            "/{cod_producto}",
            get(producto::get_by_id)
                .put(producto::update)
                .delete(producto::delete),
        )
}
