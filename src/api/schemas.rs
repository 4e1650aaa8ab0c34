// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for successful responses
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for failed responses
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "INVALID_TRANSITION")]
    pub code: String,

    #[schema(example = "Transition from 'blocked' to 'inactive' is not allowed")]
    pub message: String,
}
