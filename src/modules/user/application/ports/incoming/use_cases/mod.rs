mod get_user;
mod list_users;
mod register_user;
mod update_user_state;

pub use get_user::{GetUserError, GetUserUseCase};
pub use list_users::ListUsersUseCase;
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
};
pub use update_user_state::{
    ApproveUserUseCase, RejectUserUseCase, UnblockUserUseCase, UpdateUserStateError,
    UpdateUserStateUseCase,
};
