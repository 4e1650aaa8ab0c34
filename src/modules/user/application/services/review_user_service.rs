use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::user::application::{
    domain::{policies::LifecyclePolicy, User, UserId, UserState},
    ports::incoming::use_cases::{
        ApproveUserUseCase, RejectUserUseCase, UnblockUserUseCase, UpdateUserStateError,
        UpdateUserStateUseCase,
    },
};

/// Moves a user to the configured approval target.
#[derive(Clone)]
pub struct ApproveUserService {
    update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync>,
    target: UserState,
}

impl ApproveUserService {
    pub fn new(
        update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync>,
        policy: &LifecyclePolicy,
    ) -> Self {
        Self {
            update_state,
            target: policy.approval_target(),
        }
    }
}

#[async_trait]
impl ApproveUserUseCase for ApproveUserService {
    async fn execute(&self, id: UserId) -> Result<User, UpdateUserStateError> {
        self.update_state.execute(id, self.target).await
    }
}

#[derive(Clone)]
pub struct RejectUserService {
    update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync>,
}

impl RejectUserService {
    pub fn new(update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync>) -> Self {
        Self { update_state }
    }
}

#[async_trait]
impl RejectUserUseCase for RejectUserService {
    async fn execute(&self, id: UserId) -> Result<User, UpdateUserStateError> {
        self.update_state.execute(id, UserState::Blocked).await
    }
}

#[derive(Clone)]
pub struct UnblockUserService {
    update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync>,
}

impl UnblockUserService {
    pub fn new(update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync>) -> Self {
        Self { update_state }
    }
}

#[async_trait]
impl UnblockUserUseCase for UnblockUserService {
    async fn execute(&self, id: UserId) -> Result<User, UpdateUserStateError> {
        self.update_state.execute(id, UserState::Active).await
    }
}
