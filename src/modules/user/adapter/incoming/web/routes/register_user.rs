use actix_web::{post, web, HttpResponse};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use super::user_view::UserView;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::user::application::ports::incoming::use_cases::{
        RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[serde(default, alias = "waId")]
    #[schema(example = "+255712345678")]
    pub wa_id: String,

    #[schema(example = "Amina Hassan")]
    pub name: Option<String>,

    #[serde(alias = "schoolName")]
    #[schema(example = "Azania Secondary")]
    pub school_name: Option<String>,

    #[schema(example = "Dar es Salaam")]
    pub region: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Self-registration
///
/// Creates a teacher account awaiting admin review (`in_review`).
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = "users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 409, description = "WhatsApp ID already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users/register")]
pub async fn register_user_handler(
    payload: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let dto = payload.into_inner();

    let command = match RegisterUserCommand::new(dto.wa_id, dto.name, dto.school_name, dto.region)
    {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.users.register.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, "User registered");
            ApiResponse::created(UserView::from(user))
        }
        Err(RegisterUserError::DuplicateWaId) => ApiResponse::conflict(
            "DUPLICATE_WA_ID",
            "A user with this WhatsApp ID already exists",
        ),
        Err(RegisterUserError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to register user");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    let code = match err {
        RegisterUserCommandError::MissingWaId => "MISSING_WA_ID",
        RegisterUserCommandError::InvalidWaId => "INVALID_WA_ID",
        RegisterUserCommandError::NameTooLong { .. } => "NAME_TOO_LONG",
        RegisterUserCommandError::SchoolNameTooLong { .. } => "SCHOOL_NAME_TOO_LONG",
        RegisterUserCommandError::RegionTooLong { .. } => "REGION_TOO_LONG",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;

    use crate::{
        modules::user::application::domain::{LifecyclePolicy, UserState},
        tests::support::{
            app_state_builder::{in_memory_user_use_cases, TestAppStateBuilder},
            in_memory_user_store::InMemoryUserStore,
        },
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    async fn register(
        store: InMemoryUserStore,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_users(in_memory_user_use_cases(store, LifecyclePolicy::default()))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn registers_user_in_review() {
        let store = InMemoryUserStore::new();

        let resp = register(
            store.clone(),
            serde_json::json!({
                "waId": "+255712345678",
                "name": "  Juma Said ",
                "schoolName": "",
                "region": "Arusha"
            }),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["state"], "in_review");
        assert_eq!(json["data"]["role"], "teacher");
        assert_eq!(json["data"]["onboarding_state"], "new");
        assert_eq!(json["data"]["name"], "Juma Said");
        assert!(json["data"]["school_name"].is_null());
        assert_eq!(store.count_by_wa_id("+255712345678"), 1);
    }

    #[actix_web::test]
    async fn duplicate_wa_id_is_conflict_and_keeps_one_row() {
        let store = InMemoryUserStore::new();
        store.seed("255712345678", UserState::Active, Utc::now());

        let resp = register(store.clone(), serde_json::json!({ "wa_id": "255712345678" })).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(read_json(resp).await["error"]["code"], "DUPLICATE_WA_ID");
        assert_eq!(store.count_by_wa_id("255712345678"), 1);
    }

    #[actix_web::test]
    async fn missing_wa_id_is_bad_request() {
        let resp = register(InMemoryUserStore::new(), serde_json::json!({ "name": "A" })).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(resp).await["error"]["code"], "MISSING_WA_ID");
    }

    #[actix_web::test]
    async fn malformed_wa_id_is_bad_request() {
        let resp = register(
            InMemoryUserStore::new(),
            serde_json::json!({ "wa_id": "call-me-maybe" }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(resp).await["error"]["code"], "INVALID_WA_ID");
    }

    #[actix_web::test]
    async fn overlong_school_name_is_bad_request() {
        let resp = register(
            InMemoryUserStore::new(),
            serde_json::json!({ "wa_id": "255700000001", "school_name": "s".repeat(101) }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            read_json(resp).await["error"]["code"],
            "SCHOOL_NAME_TOO_LONG"
        );
    }

    #[actix_web::test]
    async fn storage_failure_is_internal_error() {
        let resp = register(
            InMemoryUserStore::failing(),
            serde_json::json!({ "wa_id": "255700000001" }),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
