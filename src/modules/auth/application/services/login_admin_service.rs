use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::modules::auth::application::{
    domain::{AdminCredentials, IssuedSession},
    ports::{
        incoming::use_cases::{LoginAdminCommand, LoginAdminError, LoginAdminUseCase},
        outgoing::TokenProvider,
    },
};

#[derive(Clone)]
pub struct LoginAdminService {
    credentials: AdminCredentials,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginAdminService {
    pub fn new(credentials: AdminCredentials, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            credentials,
            token_provider,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(&self, command: LoginAdminCommand) -> Result<IssuedSession, LoginAdminError> {
        if !self.credentials.matches(command.username(), command.password()) {
            warn!(username = %command.username(), "Admin login rejected");
            return Err(LoginAdminError::InvalidCredentials);
        }

        let issued = self
            .token_provider
            .issue_session_token(self.credentials.username())
            .map_err(|e| {
                error!(error = %e, "Failed to sign admin session token");
                LoginAdminError::TokenGenerationFailed(e.to_string())
            })?;

        let expires_at = issued.claims.expires_at().ok_or_else(|| {
            LoginAdminError::TokenGenerationFailed("expiry out of range".to_string())
        })?;

        info!(session_id = %issued.claims.jti, "Admin logged in");

        Ok(IssuedSession {
            username: self.credentials.username().to_string(),
            token: issued.token,
            expires_at,
        })
    }
}
