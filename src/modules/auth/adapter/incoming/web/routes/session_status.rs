use actix_web::{get, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::schemas::SuccessResponse, modules::auth::application::domain::AdminSession,
    shared::api::ApiResponse,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Session status
///
/// Reports whether the caller holds a valid admin session.
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "admin-auth",
    responses(
        (status = 200, description = "Session status", body = inline(SuccessResponse<SessionStatusResponse>)),
    )
)]
#[get("/api/admin/session")]
pub async fn session_status_handler(session: Option<AdminSession>) -> HttpResponse {
    let status = match session {
        Some(session) => SessionStatusResponse {
            authenticated: true,
            username: Some(session.username),
            expires_at: Some(session.expires_at),
        },
        None => SessionStatusResponse {
            authenticated: false,
            username: None,
            expires_at: None,
        },
    };

    ApiResponse::success(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::{
        modules::auth::application::ports::incoming::use_cases::VerifySessionError,
        tests::support::{
            app_state_builder::TestAppStateBuilder, auth_helper::bearer,
            stubs::StubVerifySessionUseCase,
        },
    };

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn reports_active_session() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(session_status_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/session")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["authenticated"], true);
        assert_eq!(json["data"]["username"], "admin");
    }

    #[actix_web::test]
    async fn reports_missing_session() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(session_status_handler)).await;

        let req = test::TestRequest::get().uri("/api/admin/session").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["data"]["authenticated"], false);
        assert!(json["data"].get("username").is_none());
    }

    #[actix_web::test]
    async fn expired_session_is_reported_as_unauthenticated() {
        let state = TestAppStateBuilder::default()
            .with_verify_session(StubVerifySessionUseCase::failing(VerifySessionError::Expired))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(session_status_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/session")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(read_json(resp).await["data"]["authenticated"], false);
    }
}
