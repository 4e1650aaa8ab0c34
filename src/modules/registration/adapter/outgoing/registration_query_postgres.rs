use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::sync::Arc;
use tracing::error;

use crate::modules::registration::application::{
    domain::{Registration, RegistrationFilter, RegistrationStatusFilter},
    ports::outgoing::{RegistrationQuery, RegistrationQueryError},
};
use crate::shared::filter::ilike_pattern;

use super::registration_mapping::model_to_registration;
use super::sea_orm_entity::registrations::{Column, Entity};

#[derive(Debug, Clone)]
pub struct RegistrationQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RegistrationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationQuery for RegistrationQueryPostgres {
    async fn list(
        &self,
        filter: &RegistrationFilter,
    ) -> Result<Vec<Registration>, RegistrationQueryError> {
        let mut query = Entity::find();

        if let Some(term) = filter.search() {
            let pattern = ilike_pattern(term);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::FullName).ilike(&pattern))
                    .add(Expr::col(Column::SchoolName).ilike(&pattern))
                    .add(Expr::col(Column::Email).ilike(&pattern)),
            );
        }

        if let RegistrationStatusFilter::Only(status) = filter.status() {
            query = query.filter(Column::Status.eq(status.as_str()));
        }

        if let Some(from) = filter.created_from() {
            query = query.filter(Column::CreatedAt.gte(from.naive_utc()));
        }

        if let Some(before) = filter.created_before() {
            query = query.filter(Column::CreatedAt.lt(before.naive_utc()));
        }

        let models = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
            .into_iter()
            .filter_map(|model| {
                model_to_registration(model)
                    .inspect_err(|e| error!(error = %e, "Skipping corrupt registration record"))
                    .ok()
            })
            .collect())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RegistrationQueryError> {
        let found = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn exists_by_whatsapp_number(
        &self,
        whatsapp_number: &str,
    ) -> Result<bool, RegistrationQueryError> {
        let found = Entity::find()
            .filter(Column::WhatsappNumber.eq(whatsapp_number))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }
}

fn map_db_err(e: DbErr) -> RegistrationQueryError {
    RegistrationQueryError::DatabaseError(e.to_string())
}
