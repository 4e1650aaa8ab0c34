use crate::modules::auth::application::ports::outgoing::token_repository::{
    TokenRepository, TokenRepositoryError,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};

use std::sync::Arc;

/// Redis-backed store of revoked admin sessions.
///
/// ```text
/// admin:session:revoked:{token_hash} -> "1"   (TTL = remaining token lifetime)
/// ```
///
/// Key existence means the token is revoked. Redis expiry does the cleanup.
#[derive(Clone)]
pub struct RedisTokenRepository {
    pool: Arc<Pool>,
}

impl RedisTokenRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    pub(crate) fn revoked_key(token_hash: &str) -> String {
        format!("admin:session:revoked:{token_hash}")
    }

    /// Seconds until `expires_at`, or `None` once the token is already dead.
    pub(crate) fn ttl_seconds(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<u64> {
        let ttl = (expires_at - now).num_seconds();
        u64::try_from(ttl).ok().filter(|ttl| *ttl > 0)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenRepositoryError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenRepositoryError::StoreUnavailable(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl TokenRepository for RedisTokenRepository {
    async fn revoke_token(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        let ttl = Self::ttl_seconds(expires_at, Utc::now())
            .ok_or(TokenRepositoryError::AlreadyExpired)?;

        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(Self::revoked_key(token_hash), "1", ttl)
            .await
            .map_err(|e| TokenRepositoryError::StoreUnavailable(e.to_string()))?;

        Ok(())
    }

    async fn is_token_revoked(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(Self::revoked_key(token_hash))
            .await
            .map_err(|e| TokenRepositoryError::StoreUnavailable(e.to_string()))?;

        Ok(exists)
    }
}
