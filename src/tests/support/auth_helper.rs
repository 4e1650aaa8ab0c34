use actix_web::http::header;

/// Token the default `StubVerifySessionUseCase` accepts.
pub const TEST_SESSION_TOKEN: &str = "test-admin-session";

pub fn bearer() -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {TEST_SESSION_TOKEN}"))
}
