//! Shared HTTP types: error responses and extractors

pub mod error;
pub mod validated_json;

pub use error::{ApiError, ApiResult, DomainResultExt};
pub use validated_json::ValidatedJson;

use serde::Serialize;
use utoipa::ToSchema;

/// `{"message": ...}` acknowledgement body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"error": ...}` body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
