pub mod extractors;
pub mod routes;
pub mod session_cookie;

pub use session_cookie::{SessionCookiePolicy, SESSION_COOKIE_NAME};
