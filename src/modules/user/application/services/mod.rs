mod get_user_service;
mod list_users_service;
mod register_user_service;
mod review_user_service;
mod update_user_state_service;

pub use get_user_service::GetUserService;
pub use list_users_service::ListUsersService;
pub use register_user_service::RegisterUserService;
pub use review_user_service::{ApproveUserService, RejectUserService, UnblockUserService};
pub use update_user_state_service::UpdateUserStateService;
