mod login_admin;
mod logout_admin;
mod verify_session;

pub use login_admin::{
    LoginAdminCommand, LoginAdminCommandError, LoginAdminError, LoginAdminUseCase,
};
pub use logout_admin::LogoutAdminUseCase;
pub use verify_session::{VerifySessionError, VerifySessionUseCase};
