use actix_web::{patch, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::registration_view::RegistrationView;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::{
        auth::application::domain::AdminSession,
        registration::application::{
            domain::{RegistrationId, RegistrationStatus},
            ports::incoming::use_cases::UpdateRegistrationStatusError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRegistrationStatusRequest {
    #[schema(example = "approved")]
    pub status: String,
}

/// Set a registration's status
///
/// Any status may be set from any other.
#[utoipa::path(
    patch,
    path = "/api/admin/registrations/{id}/status",
    tag = "registrations",
    params(("id" = i32, Path, description = "Registration id")),
    request_body = UpdateRegistrationStatusRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Status updated", body = inline(SuccessResponse<RegistrationView>)),
        (status = 400, description = "Unknown status", body = ErrorResponse),
        (status = 404, description = "Registration not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/admin/registrations/{id}/status")]
pub async fn update_registration_status_handler(
    session: AdminSession,
    path: web::Path<i32>,
    payload: web::Json<UpdateRegistrationStatusRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = RegistrationId::from(path.into_inner());

    let status = match payload.status.trim().parse::<RegistrationStatus>() {
        Ok(status) => status,
        Err(e) => return ApiResponse::bad_request("INVALID_STATUS", &e.to_string()),
    };

    match data.registrations.update_status.execute(id, status).await {
        Ok(registration) => {
            info!(admin = %session.username, registration_id = %id, %status, "Registration reviewed");
            ApiResponse::success(RegistrationView::from(registration))
        }
        Err(UpdateRegistrationStatusError::NotFound) => {
            ApiResponse::not_found("REGISTRATION_NOT_FOUND", "Registration not found")
        }
        Err(UpdateRegistrationStatusError::RepositoryError(msg)) => {
            error!(registration_id = %id, error = %msg, "Failed to update registration status");
            ApiResponse::internal_error()
        }
    }
}
