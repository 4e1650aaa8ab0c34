use async_trait::async_trait;

use crate::modules::user::application::domain::{User, UserFilter, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// A stored row holds a value outside its enumeration.
    #[error("Corrupt user record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Users matching `filter`, newest `created_at` first.
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, UserQueryError>;

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError>;

    async fn exists_by_wa_id(&self, wa_id: &str) -> Result<bool, UserQueryError>;
}
