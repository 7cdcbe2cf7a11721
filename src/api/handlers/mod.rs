//! HTTP handlers.

mod system;
mod todos;


use serde::Serialize;
use utoipa::ToSchema;

pub use system::*;
pub use todos::*;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Todo '1' not found")]
    pub error: String,
}
