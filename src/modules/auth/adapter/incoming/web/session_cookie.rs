use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use chrono::{DateTime, Utc};

pub const SESSION_COOKIE_NAME: &str = "admin_session";

/// Attributes of the `admin_session` cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionCookiePolicy {
    pub secure: bool,
}

impl SessionCookiePolicy {
    pub fn for_environment(rust_env: &str) -> Self {
        Self {
            secure: rust_env == "production",
        }
    }

    pub fn session_cookie(&self, token: &str, expires_at: DateTime<Utc>) -> Cookie<'static> {
        let max_age = (expires_at - Utc::now()).num_seconds().max(0);

        Cookie::build(SESSION_COOKIE_NAME, token.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(CookieDuration::seconds(max_age))
            .finish()
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}
