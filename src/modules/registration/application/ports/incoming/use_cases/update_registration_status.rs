use async_trait::async_trait;

use crate::modules::registration::application::domain::{
    Registration, RegistrationId, RegistrationStatus,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateRegistrationStatusError {
    #[error("Registration not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateRegistrationStatusUseCase: Send + Sync {
    async fn execute(
        &self,
        id: RegistrationId,
        status: RegistrationStatus,
    ) -> Result<Registration, UpdateRegistrationStatusError>;
}
