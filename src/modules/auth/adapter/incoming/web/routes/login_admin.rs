use actix_web::{post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::auth::application::ports::incoming::use_cases::{
        LoginAdminCommand, LoginAdminError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginAdminRequest {
    #[serde(default)]
    #[schema(example = "admin")]
    pub username: String,

    #[serde(default)]
    #[schema(example = "change-me")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginAdminResponse {
    #[schema(example = "admin")]
    pub username: String,

    /// Same value as the `admin_session` cookie
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    pub expires_at: DateTime<Utc>,
}

/// Admin login
///
/// Checks the configured admin credentials and opens a session. The session
/// token is set as an HttpOnly `admin_session` cookie and returned in the body.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin-auth",
    request_body = LoginAdminRequest,
    responses(
        (status = 200, description = "Logged in", body = inline(SuccessResponse<LoginAdminResponse>)),
        (status = 400, description = "Username or password missing", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    payload: web::Json<LoginAdminRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let dto = payload.into_inner();

    let command = match LoginAdminCommand::new(dto.username, dto.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("MISSING_CREDENTIALS", &e.to_string()),
    };

    info!(username = %command.username(), "Admin login attempt");

    match data.auth.login.execute(command).await {
        Ok(session) => {
            let cookie = data
                .session_cookie
                .session_cookie(&session.token, session.expires_at);

            let mut response = ApiResponse::success(LoginAdminResponse {
                username: session.username,
                token: session.token,
                expires_at: session.expires_at,
            });

            if let Err(e) = response.add_cookie(&cookie) {
                error!(error = %e, "Failed to attach session cookie");
                return ApiResponse::internal_error();
            }

            response
        }
        Err(LoginAdminError::InvalidCredentials) => {
            warn!("Admin login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        Err(LoginAdminError::TokenGenerationFailed(msg)) => {
            error!(error = %msg, "Admin login failed: token generation");
            ApiResponse::internal_error()
        }
    }
}
