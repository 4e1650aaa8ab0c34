mod login_admin_service;
mod logout_admin_service;
mod verify_session_service;

pub use login_admin_service::LoginAdminService;
pub use logout_admin_service::LogoutAdminService;
pub use verify_session_service::VerifySessionService;
