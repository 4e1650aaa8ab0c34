use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::modules::auth::application::ports::{
    incoming::use_cases::LogoutAdminUseCase,
    outgoing::{token_hasher::hash_token, TokenProvider, TokenRepository},
};

#[derive(Clone)]
pub struct LogoutAdminService<R>
where
    R: TokenRepository + Send + Sync,
{
    token_provider: Arc<dyn TokenProvider>,
    token_repository: R,
}

impl<R> LogoutAdminService<R>
where
    R: TokenRepository + Send + Sync,
{
    pub fn new(token_provider: Arc<dyn TokenProvider>, token_repository: R) -> Self {
        Self {
            token_provider,
            token_repository,
        }
    }
}

#[async_trait]
impl<R> LogoutAdminUseCase for LogoutAdminService<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, token: Option<String>) {
        let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
            debug!("Logout without a session token");
            return;
        };

        // Tokens that no longer verify are already unusable.
        let claims = match self.token_provider.verify_session_token(&token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Logout with an unusable token");
                return;
            }
        };

        let Some(expires_at) = claims.expires_at() else {
            return;
        };

        match self
            .token_repository
            .revoke_token(&hash_token(&token), expires_at)
            .await
        {
            Ok(()) => info!(session_id = %claims.jti, "Admin session revoked"),
            Err(e) => warn!(session_id = %claims.jti, error = %e, "Failed to revoke admin session"),
        }
    }
}
