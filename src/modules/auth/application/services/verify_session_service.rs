use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::modules::auth::application::{
    domain::AdminSession,
    ports::{
        incoming::use_cases::{VerifySessionError, VerifySessionUseCase},
        outgoing::{token_hasher::hash_token, TokenError, TokenProvider, TokenRepository},
    },
};

#[derive(Clone)]
pub struct VerifySessionService<R>
where
    R: TokenRepository + Send + Sync,
{
    token_provider: Arc<dyn TokenProvider>,
    token_repository: R,
}

impl<R> VerifySessionService<R>
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
impl<R> VerifySessionUseCase for VerifySessionService<R>
where
    R: TokenRepository + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<AdminSession, VerifySessionError> {
        let claims = self
            .token_provider
            .verify_session_token(token)
            .map_err(|e| match e {
                TokenError::TokenExpired => VerifySessionError::Expired,
                other => {
                    debug!(error = %other, "Rejected admin session token");
                    VerifySessionError::Invalid
                }
            })?;

        let expires_at = claims.expires_at().ok_or(VerifySessionError::Invalid)?;

        let revoked = self
            .token_repository
            .is_token_revoked(&hash_token(token))
            .await
            .map_err(|e| {
                error!(error = %e, "Session revocation check failed");
                VerifySessionError::RevocationCheckFailed(e.to_string())
            })?;

        if revoked {
            warn!(session_id = %claims.jti, "Revoked admin session presented");
            return Err(VerifySessionError::Revoked);
        }

        Ok(AdminSession {
            username: claims.sub,
            session_id: claims.jti,
            expires_at,
        })
    }
}
