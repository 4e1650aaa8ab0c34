use async_trait::async_trait;
use tracing::{error, info};

use crate::modules::registration::application::{
    domain::Registration,
    ports::{
        incoming::use_cases::{
            SubmitRegistrationCommand, SubmitRegistrationError, SubmitRegistrationUseCase,
        },
        outgoing::{CreateRegistrationData, RegistrationQuery, RegistrationRepository},
    },
};

#[derive(Debug, Clone)]
pub struct SubmitRegistrationService<Q, R>
where
    Q: RegistrationQuery + Send + Sync,
    R: RegistrationRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> SubmitRegistrationService<Q, R>
where
    Q: RegistrationQuery + Send + Sync,
    R: RegistrationRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> SubmitRegistrationUseCase for SubmitRegistrationService<Q, R>
where
    Q: RegistrationQuery + Send + Sync,
    R: RegistrationRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: SubmitRegistrationCommand,
    ) -> Result<Registration, SubmitRegistrationError> {
        let lookup_failed = |e: &dyn std::fmt::Display| {
            error!(error = %e, "Failed to check registration uniqueness");
            SubmitRegistrationError::RepositoryError(e.to_string())
        };

        if self
            .query
            .exists_by_email(command.email())
            .await
            .map_err(|e| lookup_failed(&e))?
        {
            return Err(SubmitRegistrationError::DuplicateEmail);
        }

        if self
            .query
            .exists_by_whatsapp_number(command.whatsapp_number())
            .await
            .map_err(|e| lookup_failed(&e))?
        {
            return Err(SubmitRegistrationError::DuplicateWhatsappNumber);
        }

        let data = CreateRegistrationData {
            full_name: command.full_name().to_string(),
            school_name: command.school_name().to_string(),
            email: command.email().to_string(),
            whatsapp_number: command.whatsapp_number().to_string(),
        };

        let registration = self.repository.create(data).await.map_err(|e| {
            error!(error = %e, "Failed to insert registration");
            SubmitRegistrationError::RepositoryError(e.to_string())
        })?;

        info!(registration_id = %registration.id, "Registration submitted");

        Ok(registration)
    }
}
