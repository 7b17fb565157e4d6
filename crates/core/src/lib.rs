//! Shared domain types for the product catalog.
//!
//! Kept deliberately small: the ID alias and the domain error type used by
//! both the repository layer and the HTTP service.

pub mod error;
pub mod types;
