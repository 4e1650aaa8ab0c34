use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::modules::auth::application::ports::outgoing::{TokenRepository, TokenRepositoryError};

/// Revocation list keyed by token digest, mirroring the Redis TTL rules.
#[derive(Clone, Default)]
pub struct InMemoryTokenRepository {
    revoked: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
    failing: bool,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn contains(&self, token_hash: &str) -> bool {
        self.revoked.lock().unwrap().contains_key(token_hash)
    }

    pub fn len(&self) -> usize {
        self.revoked.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn revoke_token(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        if self.failing {
            return Err(TokenRepositoryError::StoreUnavailable(
                "connection refused".into(),
            ));
        }
        if expires_at <= Utc::now() {
            return Err(TokenRepositoryError::AlreadyExpired);
        }

        self.revoked
            .lock()
            .unwrap()
            .insert(token_hash.to_string(), expires_at);
        Ok(())
    }

    async fn is_token_revoked(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        if self.failing {
            return Err(TokenRepositoryError::StoreUnavailable(
                "connection refused".into(),
            ));
        }

        let revoked = self.revoked.lock().unwrap();
        Ok(revoked
            .get(token_hash)
            .is_some_and(|expires_at| *expires_at > Utc::now()))
    }
}
