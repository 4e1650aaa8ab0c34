use std::sync::Arc;

use crate::modules::user::application::ports::incoming::use_cases::{
    ApproveUserUseCase, GetUserUseCase, ListUsersUseCase, RegisterUserUseCase,
    RejectUserUseCase, UnblockUserUseCase, UpdateUserStateUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub list: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub get: Arc<dyn GetUserUseCase + Send + Sync>,
    pub update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync>,
    pub approve: Arc<dyn ApproveUserUseCase + Send + Sync>,
    pub reject: Arc<dyn RejectUserUseCase + Send + Sync>,
    pub unblock: Arc<dyn UnblockUserUseCase + Send + Sync>,
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
}
