mod get_user;
mod list_users;
mod register_user;
mod review_user;
mod update_user_state;
mod user_view;

pub use get_user::*;
pub use list_users::*;
pub use register_user::*;
pub use review_user::*;
pub use update_user_state::*;
pub use user_view::UserView;
