//! Shared response types for API handlers.
//!
//! Entity endpoints return plain JSON bodies (an array for list, the
//! product itself for get/create). Operations that only acknowledge use
//! [`MessageResponse`] for the fixed `{ "message": ... }` envelope.

use serde::Serialize;

/// Fixed-text `{ "message": ... }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
