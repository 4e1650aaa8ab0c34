use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::registration_view::RegistrationView;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::registration::application::ports::incoming::use_cases::{
        SubmitRegistrationCommand, SubmitRegistrationCommandError, SubmitRegistrationError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitRegistrationRequest {
    #[serde(default, alias = "fullName")]
    #[schema(example = "Neema Mushi")]
    pub full_name: String,

    #[serde(default, alias = "schoolName")]
    #[schema(example = "Kibaha Secondary")]
    pub school_name: String,

    #[serde(default)]
    #[schema(example = "neema@example.org")]
    pub email: String,

    #[serde(default, alias = "whatsappNumber")]
    #[schema(example = "+255711000001")]
    pub whatsapp_number: String,
}

/// Submit a registration
///
/// Legacy sign-up form. New rows start as `pending`.
#[utoipa::path(
    post,
    path = "/api/registrations",
    tag = "registrations",
    request_body = SubmitRegistrationRequest,
    responses(
        (status = 201, description = "Registration stored", body = inline(SuccessResponse<RegistrationView>)),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 409, description = "Email or WhatsApp number already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/registrations")]
pub async fn submit_registration_handler(
    payload: web::Json<SubmitRegistrationRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let dto = payload.into_inner();

    let command = match SubmitRegistrationCommand::new(
        dto.full_name,
        dto.school_name,
        dto.email,
        dto.whatsapp_number,
    ) {
        Ok(cmd) => cmd,
        Err(err) => {
            let code = match err {
                SubmitRegistrationCommandError::MissingFields => "MISSING_FIELDS",
                SubmitRegistrationCommandError::InvalidEmail => "INVALID_EMAIL",
            };
            return ApiResponse::bad_request(code, &err.to_string());
        }
    };

    match data.registrations.submit.execute(command).await {
        Ok(registration) => ApiResponse::created(RegistrationView::from(registration)),
        Err(SubmitRegistrationError::DuplicateEmail) => ApiResponse::conflict(
            "DUPLICATE_EMAIL",
            "A registration with this email already exists",
        ),
        Err(SubmitRegistrationError::DuplicateWhatsappNumber) => ApiResponse::conflict(
            "DUPLICATE_WHATSAPP_NUMBER",
            "A registration with this WhatsApp number already exists",
        ),
        Err(SubmitRegistrationError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to submit registration");
            ApiResponse::internal_error()
        }
    }
}
