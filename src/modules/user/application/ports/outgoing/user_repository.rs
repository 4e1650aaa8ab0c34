use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::user::application::domain::{OnboardingState, Role, User, UserId, UserState};

// Input DTO for inserting a self-registered user
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserData {
    pub wa_id: String,
    pub name: Option<String>,
    pub school_name: Option<String>,
    pub region: Option<String>,
    pub role: Role,
    pub onboarding_state: OnboardingState,
    pub state: UserState,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("A user with this WhatsApp ID already exists")]
    DuplicateWaId,

    #[error("User not found")]
    NotFound,

    #[error("User state is no longer '{0}'")]
    StaleState(UserState),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt user record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    /// Single-row write of `state` and `updated_at`. Returns the stored row.
    ///
    /// With `expected` set, the row is only written while it still holds that
    /// state; otherwise the call fails with `StaleState`.
    async fn update_state(
        &self,
        id: UserId,
        expected: Option<UserState>,
        state: UserState,
        updated_at: DateTime<Utc>,
    ) -> Result<User, UserRepositoryError>;
}
