use actix_web::{get, web, HttpResponse};
use tracing::error;

use super::user_view::UserView;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::{
        auth::application::domain::AdminSession,
        user::application::{domain::UserId, ports::incoming::use_cases::GetUserError},
    },
    shared::api::ApiResponse,
    AppState,
};

/// Get user
#[utoipa::path(
    get,
    path = "/api/admin/users/{id}",
    tag = "admin-users",
    params(("id" = i32, Path, description = "User id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<UserView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/admin/users/{id}")]
pub async fn get_user_handler(
    _session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = UserId::from(path.into_inner());

    match data.users.get.execute(id).await {
        Ok(user) => ApiResponse::success(UserView::from(user)),
        Err(GetUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),
        Err(GetUserError::QueryFailed(msg)) => {
            error!(user_id = %id, error = %msg, "Failed to fetch user");
            ApiResponse::internal_error()
        }
    }
}
