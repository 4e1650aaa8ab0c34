use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use tracing::error;

use crate::modules::user::application::{
    domain::{StatusFilter, User, UserFilter, UserId},
    ports::outgoing::{UserQuery, UserQueryError},
};
use crate::shared::filter::ilike_pattern;

use super::sea_orm_entity::users::{Column, Entity};
use super::user_mapping::model_to_user;

#[derive(Debug, Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn list(&self, filter: &UserFilter) -> Result<Vec<User>, UserQueryError> {
        let mut query = Entity::find();

        if let Some(term) = filter.search() {
            let pattern = ilike_pattern(term);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::WaId).ilike(&pattern))
                    .add(Expr::col(Column::SchoolName).ilike(&pattern))
                    .add(Expr::col(Column::Region).ilike(&pattern)),
            );
        }

        if let StatusFilter::Only(state) = filter.status() {
            query = query.filter(Column::State.eq(state.as_str()));
        }

        if let Some(from) = filter.created_from() {
            query = query.filter(Column::CreatedAt.gte(from.fixed_offset()));
        }

        if let Some(before) = filter.created_before() {
            query = query.filter(Column::CreatedAt.lt(before.fixed_offset()));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        // A single corrupt row must not hide the rest of the table.
        let users = models
            .into_iter()
            .filter_map(|model| {
                model_to_user(model)
                    .inspect_err(|e| error!(error = %e, "Skipping corrupt user record"))
                    .ok()
            })
            .collect();

        Ok(users)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserQueryError> {
        let model = Entity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        model
            .map(model_to_user)
            .transpose()
            .map_err(UserQueryError::CorruptRecord)
    }

    async fn exists_by_wa_id(&self, wa_id: &str) -> Result<bool, UserQueryError> {
        let found = Entity::find()
            .filter(Column::WaId.eq(wa_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}
