use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::error;

use crate::{
    modules::auth::{
        adapter::incoming::web::session_cookie::SESSION_COOKIE_NAME,
        application::{
            domain::AdminSession, ports::incoming::use_cases::VerifySessionError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let data = req.app_data::<web::Data<AppState>>().cloned();
        let token = extract_session_token(req);

        Box::pin(async move {
            let Some(data) = data else {
                error!("AppState missing while authenticating admin session");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "MISSING_SESSION",
                    "Admin session required",
                )));
            };

            data.auth
                .verify_session
                .execute(&token)
                .await
                .map_err(|e| create_api_error(map_verify_error(e)))
        })
    }
}

fn map_verify_error(err: VerifySessionError) -> HttpResponse {
    match err {
        VerifySessionError::Invalid => {
            ApiResponse::unauthorized("INVALID_SESSION", "Invalid admin session")
        }
        VerifySessionError::Expired => {
            ApiResponse::unauthorized("SESSION_EXPIRED", "Admin session has expired")
        }
        VerifySessionError::Revoked => {
            ApiResponse::unauthorized("SESSION_REVOKED", "Admin session has been revoked")
        }
        VerifySessionError::RevocationCheckFailed(_) => ApiResponse::service_unavailable(
            "SESSION_STORE_UNAVAILABLE",
            "Session store is unavailable",
        ),
    }
}

/// Session token from the `admin_session` cookie, else an `Authorization: Bearer` header.
pub fn extract_session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE_NAME) {
        let value = cookie.value().trim();
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }

    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
