use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::registration::application::domain::{
    Registration, RegistrationId, RegistrationStatus,
};

#[derive(Debug, Clone)]
pub struct CreateRegistrationData {
    pub full_name: String,
    pub school_name: String,
    pub email: String,
    pub whatsapp_number: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationRepositoryError {
    #[error("Registration not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Corrupt registration record: {0}")]
    CorruptRecord(String),
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Inserts a `pending` registration. The table has no unique constraints,
    /// so uniqueness is the caller's concern.
    async fn create(
        &self,
        data: CreateRegistrationData,
    ) -> Result<Registration, RegistrationRepositoryError>;

    async fn update_status(
        &self,
        id: RegistrationId,
        status: RegistrationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Registration, RegistrationRepositoryError>;
}
