use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::user::application::{
    domain::{User, UserId, UserState},
    ports::outgoing::{CreateUserData, UserRepository, UserRepositoryError},
};
use crate::shared::db::is_unique_violation;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Column, Entity};
use super::user_mapping::model_to_user;

#[derive(Debug, Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active = UserActiveModel {
            id: NotSet,
            name: Set(data.name),
            wa_id: Set(data.wa_id),
            state: Set(data.state.as_str().to_string()),
            onboarding_state: Set(Some(data.onboarding_state.as_str().to_string())),
            role: Set(data.role.as_str().to_string()),
            class_info: NotSet,
            school_name: Set(data.school_name),
            birthday: NotSet,
            region: Set(data.region),
            last_message_at: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                return UserRepositoryError::DuplicateWaId;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        model_to_user(inserted).map_err(UserRepositoryError::CorruptRecord)
    }

    async fn update_state(
        &self,
        id: UserId,
        expected: Option<UserState>,
        state: UserState,
        updated_at: DateTime<Utc>,
    ) -> Result<User, UserRepositoryError> {
        let changes = UserActiveModel {
            state: Set(state.as_str().to_string()),
            updated_at: Set(updated_at.fixed_offset()),
            ..Default::default()
        };

        let mut update = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id.value()));

        if let Some(expected) = expected {
            update = update.filter(Column::State.eq(expected.as_str()));
        }

        let updated = update
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        match updated.into_iter().next() {
            Some(model) => model_to_user(model).map_err(UserRepositoryError::CorruptRecord),
            None => Err(match expected {
                Some(expected) => UserRepositoryError::StaleState(expected),
                None => UserRepositoryError::NotFound,
            }),
        }
    }
}
