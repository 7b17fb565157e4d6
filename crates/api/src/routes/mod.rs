pub mod health;
pub mod producto;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /productos                    list, create
/// /productos/{codProducto}      get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/productos", producto::router())
}
