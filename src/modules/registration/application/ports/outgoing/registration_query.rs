use async_trait::async_trait;

use crate::modules::registration::application::domain::{Registration, RegistrationFilter};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait RegistrationQuery: Send + Sync {
    async fn list(
        &self,
        filter: &RegistrationFilter,
    ) -> Result<Vec<Registration>, RegistrationQueryError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, RegistrationQueryError>;

    async fn exists_by_whatsapp_number(
        &self,
        whatsapp_number: &str,
    ) -> Result<bool, RegistrationQueryError>;
}
