use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenRepositoryError {
    #[error("Token is already expired")]
    AlreadyExpired,

    #[error("Session store error: {0}")]
    StoreUnavailable(String),
}

/// Server-side record of revoked session tokens, keyed by token digest.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn revoke_token(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_revoked(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}
