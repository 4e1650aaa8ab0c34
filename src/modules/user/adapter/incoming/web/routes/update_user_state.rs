use actix_web::{patch, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::user_view::UserView;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::{
        auth::application::domain::AdminSession,
        user::application::{
            domain::{UserId, UserState},
            ports::incoming::use_cases::UpdateUserStateError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserStateRequest {
    #[schema(example = "active")]
    pub state: String,
}

/// Change a user's lifecycle state
///
/// The transition is checked against the configured transition policy.
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/state",
    tag = "admin-users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserStateRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "State updated", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Unknown state", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "State changed concurrently", body = ErrorResponse),
        (status = 422, description = "Transition not allowed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/admin/users/{id}/state")]
pub async fn update_user_state_handler(
    session: AdminSession,
    path: web::Path<i32>,
    payload: web::Json<UpdateUserStateRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = UserId::from(path.into_inner());

    let target = match payload.state.trim().parse::<UserState>() {
        Ok(state) => state,
        Err(e) => return ApiResponse::bad_request("INVALID_STATE", &e.to_string()),
    };

    match data.users.update_state.execute(id, target).await {
        Ok(user) => {
            info!(admin = %session.username, user_id = %id, state = %user.state, "User state changed");
            ApiResponse::success(UserView::from(user))
        }
        Err(err) => map_update_state_error(id, err),
    }
}

pub(super) fn map_update_state_error(id: UserId, err: UpdateUserStateError) -> HttpResponse {
    match err {
        UpdateUserStateError::NotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        UpdateUserStateError::TransitionDenied(denied) => {
            ApiResponse::unprocessable_entity("INVALID_TRANSITION", &denied.to_string())
        }
        UpdateUserStateError::Conflict => ApiResponse::conflict(
            "STATE_CONFLICT",
            "User state was changed by another request; reload and retry",
        ),
        UpdateUserStateError::RepositoryError(msg) => {
            error!(user_id = %id, error = %msg, "Failed to update user state");
            ApiResponse::internal_error()
        }
    }
}
