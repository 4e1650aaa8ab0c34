use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;

use crate::modules::registration::application::{
    domain::{Registration, RegistrationId, RegistrationStatus},
    ports::outgoing::{
        CreateRegistrationData, RegistrationRepository, RegistrationRepositoryError,
    },
};

use super::registration_mapping::model_to_registration;
use super::sea_orm_entity::registrations::ActiveModel as RegistrationActiveModel;

#[derive(Debug, Clone)]
pub struct RegistrationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegistrationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryPostgres {
    async fn create(
        &self,
        data: CreateRegistrationData,
    ) -> Result<Registration, RegistrationRepositoryError> {
        let now = Utc::now().naive_utc();
        let active = RegistrationActiveModel {
            id: NotSet,
            full_name: Set(data.full_name),
            school_name: Set(data.school_name),
            email: Set(data.email),
            whatsapp_number: Set(data.whatsapp_number),
            status: Set(RegistrationStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| RegistrationRepositoryError::DatabaseError(e.to_string()))?;

        model_to_registration(inserted).map_err(RegistrationRepositoryError::CorruptRecord)
    }

    async fn update_status(
        &self,
        id: RegistrationId,
        status: RegistrationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Registration, RegistrationRepositoryError> {
        let active = RegistrationActiveModel {
            id: Set(id.value()),
            status: Set(status.as_str().to_string()),
            updated_at: Set(updated_at.naive_utc()),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RegistrationRepositoryError::NotFound,
            other => RegistrationRepositoryError::DatabaseError(other.to_string()),
        })?;

        model_to_registration(updated).map_err(RegistrationRepositoryError::CorruptRecord)
    }
}
