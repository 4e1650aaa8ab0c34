use async_trait::async_trait;
use tracing::error;

use crate::modules::user::application::{
    domain::{User, UserId},
    ports::{
        incoming::use_cases::{GetUserError, GetUserUseCase},
        outgoing::UserQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, id: UserId) -> Result<User, GetUserError> {
        self.query
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!(user_id = %id, error = %e, "Failed to load user");
                GetUserError::QueryFailed(e.to_string())
            })?
            .ok_or(GetUserError::NotFound)
    }
}
