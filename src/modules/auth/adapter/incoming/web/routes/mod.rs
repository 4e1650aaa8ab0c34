mod login_admin;
mod logout_admin;
mod session_status;

pub use login_admin::*;
pub use logout_admin::*;
pub use session_status::*;
