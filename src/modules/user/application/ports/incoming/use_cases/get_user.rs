use async_trait::async_trait;

use crate::modules::user::application::domain::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<User, GetUserError>;
}
