use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

use super::user_view::UserView;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::{
        auth::application::domain::AdminSession,
        user::application::domain::{StatusFilter, UserFilter},
    },
    shared::{api::ApiResponse, filter::parse_date_param},
    AppState,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Case-insensitive match on name, WhatsApp ID, school or region
    pub search: Option<String>,
    /// `all` or a lifecycle state
    #[param(example = "in_review")]
    pub status: Option<String>,
    /// Inclusive lower bound on `created_at` (YYYY-MM-DD)
    #[serde(alias = "startDate")]
    pub start_date: Option<String>,
    /// Inclusive upper bound on `created_at` (YYYY-MM-DD)
    #[serde(alias = "endDate")]
    pub end_date: Option<String>,
}

/// List users
///
/// Returns users matching the filter, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "admin-users",
    params(ListUsersQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Matching users", body = inline(SuccessResponse<Vec<UserView>>)),
        (status = 400, description = "Invalid status or date", body = ErrorResponse),
        (status = 401, description = "Missing or invalid admin session", body = ErrorResponse),
    )
)]
#[get("/api/admin/users")]
pub async fn list_users_handler(
    _session: AdminSession,
    query: web::Query<ListUsersQuery>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let query = query.into_inner();

    let status = match query.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => StatusFilter::All,
        Some(raw) => match raw.parse::<StatusFilter>() {
            Ok(status) => status,
            Err(e) => return ApiResponse::bad_request("INVALID_STATUS", &e.to_string()),
        },
    };

    let (start_date, end_date) = match (
        parse_date_param(query.start_date.as_deref()),
        parse_date_param(query.end_date.as_deref()),
    ) {
        (Ok(start), Ok(end)) => (start, end),
        _ => {
            return ApiResponse::bad_request("INVALID_DATE", "Dates must be formatted as YYYY-MM-DD")
        }
    };

    let filter = UserFilter::new(query.search, status, start_date, end_date);
    debug!(?filter, "Listing users");

    let users: Vec<UserView> = data
        .users
        .list
        .execute(filter)
        .await
        .into_iter()
        .map(UserView::from)
        .collect();

    ApiResponse::success(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::{TimeZone, Utc};

    use crate::{
        modules::user::application::domain::{LifecyclePolicy, UserState},
        tests::support::{
            app_state_builder::{in_memory_user_use_cases, TestAppStateBuilder},
            auth_helper::bearer,
            in_memory_user_store::InMemoryUserStore,
        },
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn seeded_store() -> InMemoryUserStore {
        let store = InMemoryUserStore::new();
        store.seed(
            "255700000001",
            UserState::InReview,
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        );
        store.seed(
            "255700000002",
            UserState::Active,
            Utc.with_ymd_and_hms(2024, 5, 20, 23, 45, 0).unwrap(),
        );
        store.seed(
            "255700000003",
            UserState::Blocked,
            Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap(),
        );
        store
    }

    async fn get(uri: &str, store: InMemoryUserStore) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_users(in_memory_user_use_cases(store, LifecyclePolicy::default()))
            .build();
        let app = test::init_service(App::new().app_data(state).service(list_users_handler)).await;

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer())
            .to_request();
        test::call_service(&app, req).await
    }

    // ──────────────────────────────────────────────────────────
    // Filtering
    // ──────────────────────────────────────────────────────────

    #[actix_web::test]
    async fn lists_all_users_newest_first() {
        let resp = get("/api/admin/users", seeded_store()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        let wa_ids: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["wa_id"].as_str().unwrap())
            .collect();
        assert_eq!(wa_ids, vec!["255700000003", "255700000002", "255700000001"]);
    }

    #[actix_web::test]
    async fn filters_by_status() {
        let resp = get("/api/admin/users?status=in_review", seeded_store()).await;

        let json = read_json(resp).await;
        let users = json["data"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["state"], "in_review");
        assert_eq!(users[0]["actions"], serde_json::json!(["approve", "block"]));
    }

    #[actix_web::test]
    async fn status_all_is_no_filter() {
        let resp = get("/api/admin/users?status=all", seeded_store()).await;
        let json = read_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 3);
    }

    #[actix_web::test]
    async fn camel_case_date_params_are_accepted() {
        let resp = get(
            "/api/admin/users?startDate=2024-05-02&endDate=2024-05-20",
            seeded_store(),
        )
        .await;

        let json = read_json(resp).await;
        let users = json["data"].as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["wa_id"], "255700000002");
    }

    #[actix_web::test]
    async fn search_matches_wa_id_substring() {
        let resp = get("/api/admin/users?search=0000003", seeded_store()).await;
        let json = read_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    // ──────────────────────────────────────────────────────────
    // Errors
    // ──────────────────────────────────────────────────────────

    #[actix_web::test]
    async fn unknown_status_is_bad_request() {
        let resp = get("/api/admin/users?status=pending", seeded_store()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(resp).await["error"]["code"], "INVALID_STATUS");
    }

    #[actix_web::test]
    async fn malformed_date_is_bad_request() {
        let resp = get("/api/admin/users?start_date=01-05-2024", seeded_store()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(resp).await["error"]["code"], "INVALID_DATE");
    }

    #[actix_web::test]
    async fn storage_failure_yields_empty_list() {
        let resp = get("/api/admin/users", InMemoryUserStore::failing()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn requires_admin_session() {
        let state = TestAppStateBuilder::default().build();
        let app = test::init_service(App::new().app_data(state).service(list_users_handler)).await;

        let req = test::TestRequest::get().uri("/api/admin/users").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
