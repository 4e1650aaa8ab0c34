use async_trait::async_trait;
use tracing::error;

use crate::modules::user::application::{
    domain::{User, UserFilter},
    ports::{incoming::use_cases::ListUsersUseCase, outgoing::UserQuery},
};

#[derive(Debug, Clone)]
pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, filter: UserFilter) -> Vec<User> {
        match self.query.list(&filter).await {
            Ok(users) => users,
            Err(e) => {
                error!(error = %e, "Failed to list users, returning empty result");
                Vec::new()
            }
        }
    }
}
