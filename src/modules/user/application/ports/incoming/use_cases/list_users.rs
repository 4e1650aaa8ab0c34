use async_trait::async_trait;

use crate::modules::user::application::domain::{User, UserFilter};

/// Listing never fails from the caller's point of view: storage errors are
/// logged and produce an empty list.
#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self, filter: UserFilter) -> Vec<User>;
}
