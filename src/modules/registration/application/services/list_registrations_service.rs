use async_trait::async_trait;
use tracing::error;

use crate::modules::registration::application::{
    domain::{Registration, RegistrationFilter},
    ports::{incoming::use_cases::ListRegistrationsUseCase, outgoing::RegistrationQuery},
};

#[derive(Debug, Clone)]
pub struct ListRegistrationsService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListRegistrationsService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListRegistrationsUseCase for ListRegistrationsService<Q>
where
    Q: RegistrationQuery + Send + Sync,
{
    async fn execute(&self, filter: RegistrationFilter) -> Vec<Registration> {
        self.query.list(&filter).await.unwrap_or_else(|e| {
            error!(error = %e, "Failed to list registrations, returning empty result");
            Vec::new()
        })
    }
}
