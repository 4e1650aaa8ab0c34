use async_trait::async_trait;

use crate::modules::auth::application::domain::AdminSession;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifySessionError {
    #[error("Invalid session token")]
    Invalid,

    #[error("Session has expired")]
    Expired,

    #[error("Session has been revoked")]
    Revoked,

    #[error("Could not check session revocation: {0}")]
    RevocationCheckFailed(String),
}

#[async_trait]
pub trait VerifySessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<AdminSession, VerifySessionError>;
}
