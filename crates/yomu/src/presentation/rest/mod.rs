pub mod catalog;
pub mod health;
pub mod reader;
pub mod theme;

use serde::Serialize;

/// Inline error payload for every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
