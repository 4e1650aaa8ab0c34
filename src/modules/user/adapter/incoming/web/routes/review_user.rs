use actix_web::{post, web, HttpResponse};
use tracing::info;

use super::{update_user_state::map_update_state_error, user_view::UserView};
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::{auth::application::domain::AdminSession, user::application::domain::UserId},
    shared::api::ApiResponse,
    AppState,
};

/// Approve a user
///
/// Moves the user to the configured approval target state (`active` by default).
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/approve",
    tag = "admin-users",
    params(("id" = i32, Path, description = "User id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User approved", body = inline(SuccessResponse<UserView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "State changed concurrently", body = ErrorResponse),
        (status = 422, description = "Transition not allowed", body = ErrorResponse),
    )
)]
#[post("/api/admin/users/{id}/approve")]
pub async fn approve_user_handler(
    session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = UserId::from(path.into_inner());

    match data.users.approve.execute(id).await {
        Ok(user) => {
            info!(admin = %session.username, user_id = %id, state = %user.state, "User approved");
            ApiResponse::success(UserView::from(user))
        }
        Err(err) => map_update_state_error(id, err),
    }
}

/// Reject a user
///
/// Blocks the user.
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/reject",
    tag = "admin-users",
    params(("id" = i32, Path, description = "User id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User blocked", body = inline(SuccessResponse<UserView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "State changed concurrently", body = ErrorResponse),
        (status = 422, description = "Transition not allowed", body = ErrorResponse),
    )
)]
#[post("/api/admin/users/{id}/reject")]
pub async fn reject_user_handler(
    session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = UserId::from(path.into_inner());

    match data.users.reject.execute(id).await {
        Ok(user) => {
            info!(admin = %session.username, user_id = %id, "User rejected");
            ApiResponse::success(UserView::from(user))
        }
        Err(err) => map_update_state_error(id, err),
    }
}

/// Unblock a user
///
/// Moves a blocked user back to `active`.
#[utoipa::path(
    post,
    path = "/api/admin/users/{id}/unblock",
    tag = "admin-users",
    params(("id" = i32, Path, description = "User id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User unblocked", body = inline(SuccessResponse<UserView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "State changed concurrently", body = ErrorResponse),
        (status = 422, description = "Transition not allowed", body = ErrorResponse),
    )
)]
#[post("/api/admin/users/{id}/unblock")]
pub async fn unblock_user_handler(
    session: AdminSession,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let id = UserId::from(path.into_inner());

    match data.users.unblock.execute(id).await {
        Ok(user) => {
            info!(admin = %session.username, user_id = %id, "User unblocked");
            ApiResponse::success(UserView::from(user))
        }
        Err(err) => map_update_state_error(id, err),
    }
}
