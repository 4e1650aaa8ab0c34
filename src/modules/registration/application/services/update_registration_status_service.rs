use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::modules::registration::application::{
    domain::{Registration, RegistrationId, RegistrationStatus},
    ports::{
        incoming::use_cases::{UpdateRegistrationStatusError, UpdateRegistrationStatusUseCase},
        outgoing::{RegistrationRepository, RegistrationRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateRegistrationStatusService<R>
where
    R: RegistrationRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateRegistrationStatusService<R>
where
    R: RegistrationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateRegistrationStatusUseCase for UpdateRegistrationStatusService<R>
where
    R: RegistrationRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: RegistrationId,
        status: RegistrationStatus,
    ) -> Result<Registration, UpdateRegistrationStatusError> {
        let registration = self
            .repository
            .update_status(id, status, Utc::now())
            .await
            .map_err(|e| match e {
                RegistrationRepositoryError::NotFound => UpdateRegistrationStatusError::NotFound,
                other => {
                    error!(registration_id = %id, error = %other, "Failed to update registration status");
                    UpdateRegistrationStatusError::RepositoryError(other.to_string())
                }
            })?;

        info!(registration_id = %id, status = %status, "Registration status updated");

        Ok(registration)
    }
}
