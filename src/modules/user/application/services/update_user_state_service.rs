use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};

use crate::modules::user::application::{
    domain::{
        next_updated_at,
        policies::{LifecyclePolicy, TransitionMode},
        User, UserId, UserState,
    },
    ports::{
        incoming::use_cases::{UpdateUserStateError, UpdateUserStateUseCase},
        outgoing::{UserQuery, UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateUserStateService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    policy: LifecyclePolicy,
}

impl<Q, R> UpdateUserStateService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, policy: LifecyclePolicy) -> Self {
        Self {
            query,
            repository,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateUserStateUseCase for UpdateUserStateService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, id: UserId, target: UserState) -> Result<User, UpdateUserStateError> {
        let current = self
            .query
            .find_by_id(id)
            .await
            .map_err(|e| {
                error!(user_id = %id, error = %e, "Failed to load user for state change");
                UpdateUserStateError::RepositoryError(e.to_string())
            })?
            .ok_or(UpdateUserStateError::NotFound)?;

        if let Err(denied) = self.policy.check(current.state, target) {
            warn!(user_id = %id, from = %current.state, to = %target, "State transition denied");
            return Err(denied.into());
        }

        let updated_at = next_updated_at(current.updated_at, Utc::now());

        // The checked edge only holds while the row keeps the state it was checked from.
        let expected = match self.policy.mode() {
            TransitionMode::Guarded => Some(current.state),
            TransitionMode::Permissive => None,
        };

        let user = self
            .repository
            .update_state(id, expected, target, updated_at)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateUserStateError::NotFound,
                UserRepositoryError::StaleState(checked) => {
                    warn!(
                        user_id = %id,
                        from = %checked,
                        to = %target,
                        "User state changed concurrently"
                    );
                    UpdateUserStateError::Conflict
                }
                other => {
                    error!(user_id = %id, error = %other, "Failed to update user state");
                    UpdateUserStateError::RepositoryError(other.to_string())
                }
            })?;

        info!(user_id = %id, from = %current.state, to = %user.state, "User state changed");

        Ok(user)
    }
}
