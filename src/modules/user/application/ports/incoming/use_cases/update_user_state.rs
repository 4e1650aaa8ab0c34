use async_trait::async_trait;

use crate::modules::user::application::domain::{
    policies::TransitionDenied, User, UserId, UserState,
};

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

/// Shared by every admin state change (explicit, approve, reject).
#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserStateError {
    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    TransitionDenied(#[from] TransitionDenied),

    #[error("User state was changed by another request")]
    Conflict,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateUserStateUseCase: Send + Sync {
    async fn execute(&self, id: UserId, target: UserState) -> Result<User, UpdateUserStateError>;
}

#[async_trait]
pub trait ApproveUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<User, UpdateUserStateError>;
}

#[async_trait]
pub trait RejectUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<User, UpdateUserStateError>;
}

/// Returns a blocked user to `active`, independent of the approval target.
#[async_trait]
pub trait UnblockUserUseCase: Send + Sync {
    async fn execute(&self, id: UserId) -> Result<User, UpdateUserStateError>;
}
