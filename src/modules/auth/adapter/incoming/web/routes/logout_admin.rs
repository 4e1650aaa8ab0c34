use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::{
    api::schemas::SuccessResponse,
    modules::auth::adapter::incoming::web::extractors::extract_session_token,
    shared::api::ApiResponse, AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutAdminResponse {
    #[schema(example = "Logged out")]
    pub message: String,
}

/// Admin logout
///
/// Revokes the presented session server-side and clears the cookie.
/// Always succeeds, even without a session.
#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "admin-auth",
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutAdminResponse>)),
    )
)]
#[post("/api/admin/logout")]
pub async fn logout_admin_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    data.auth.logout.execute(extract_session_token(&req)).await;

    let mut response = ApiResponse::success(LogoutAdminResponse {
        message: "Logged out".to_string(),
    });

    if let Err(e) = response.add_cookie(&data.session_cookie.removal_cookie()) {
        error!(error = %e, "Failed to clear session cookie");
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, auth_helper::bearer,
        stubs::RecordingLogoutAdminUseCase,
    };

    #[actix_web::test]
    async fn logout_revokes_cookie_token_and_clears_cookie() {
        let logout = RecordingLogoutAdminUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_logout(logout.clone())
            .build();

        let app = test::init_service(App::new().app_data(state).service(logout_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/logout")
            .cookie(Cookie::new("admin_session", "cookie-token"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let cleared = resp
            .response()
            .cookies()
            .find(|c| c.name() == "admin_session")
            .expect("removal cookie");
        assert_eq!(cleared.value(), "");

        assert_eq!(logout.calls(), vec![Some("cookie-token".to_string())]);
    }

    #[actix_web::test]
    async fn logout_accepts_bearer_token() {
        let logout = RecordingLogoutAdminUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_logout(logout.clone())
            .build();

        let app = test::init_service(App::new().app_data(state).service(logout_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/logout")
            .insert_header(bearer())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(logout.calls().len(), 1);
        assert!(logout.calls()[0].is_some());
    }

    #[actix_web::test]
    async fn logout_without_session_still_succeeds() {
        let logout = RecordingLogoutAdminUseCase::default();
        let state = TestAppStateBuilder::default()
            .with_logout(logout.clone())
            .build();

        let app = test::init_service(App::new().app_data(state).service(logout_admin_handler)).await;

        let req = test::TestRequest::post().uri("/api/admin/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(logout.calls(), vec![None]);
    }
}
