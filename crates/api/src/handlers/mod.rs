//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! type. Handlers delegate to the corresponding repository in `catalogo_db`
//! and map errors via [`crate::error::AppError`].

pub mod producto;
