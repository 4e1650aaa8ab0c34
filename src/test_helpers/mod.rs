use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::modules::registration::adapter::outgoing::sea_orm_entity::registrations;
use crate::modules::user::adapter::outgoing::sea_orm_entity::users;
use crate::modules::user::application::domain::{OnboardingState, Role, UserState};

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedUserRequest {
    pub wa_id: String,
    pub state: String,
    pub name: Option<String>,
    pub school_name: Option<String>,
    pub region: Option<String>,
}

#[derive(Serialize)]
pub struct SeedUserResponse {
    id: i32,
    wa_id: String,
    state: String,
}

#[derive(Serialize)]
pub struct CleanupResponse {
    deleted_users: u64,
    deleted_registrations: u64,
}

/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    let env = crate::config::current_env();

    if env == "production" {
        tracing::error!("Test helper routes active in production");
        return Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: env,
    }))
}

/// Inserts a user in any state, bypassing the transition policy.
/// POST /test/users
pub async fn seed_user(
    payload: web::Json<SeedUserRequest>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let dto = payload.into_inner();

    let state = dto
        .state
        .parse::<UserState>()
        .map_err(actix_web::error::ErrorBadRequest)?;

    let now = Utc::now().fixed_offset();
    let active = users::ActiveModel {
        wa_id: Set(dto.wa_id),
        name: Set(dto.name),
        school_name: Set(dto.school_name),
        region: Set(dto.region),
        state: Set(state.as_str().to_string()),
        role: Set(Role::Teacher.as_str().to_string()),
        onboarding_state: Set(Some(OnboardingState::New.as_str().to_string())),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let inserted = active.insert(db.get_ref().as_ref()).await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Failed to seed user: {e}"))
    })?;

    tracing::debug!(user_id = inserted.id, state = %inserted.state, "Seeded test user");

    Ok(HttpResponse::Created().json(SeedUserResponse {
        id: inserted.id,
        wa_id: inserted.wa_id,
        state: inserted.state,
    }))
}

/// Removes users and registrations created by a test run.
/// DELETE /test/cleanup/{marker}
///
/// `marker` is matched as a prefix of `users.wa_id` and
/// `registrations.whatsapp_number`.
pub async fn cleanup_test_data(
    marker: web::Path<String>,
    db: web::Data<Arc<DatabaseConnection>>,
) -> Result<HttpResponse> {
    let marker = marker.into_inner();
    if marker.trim().len() < 4 {
        return Err(actix_web::error::ErrorBadRequest(
            "Marker must be at least 4 characters",
        ));
    }
    let prefix = format!("{marker}%");

    let txn = db.get_ref().begin().await.map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Transaction error: {e}"))
    })?;

    let deleted_users = users::Entity::delete_many()
        .filter(users::Column::WaId.like(&prefix))
        .exec(&txn)
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Failed to delete users: {e}"))
        })?
        .rows_affected;

    let deleted_registrations = registrations::Entity::delete_many()
        .filter(registrations::Column::WhatsappNumber.like(&prefix))
        .exec(&txn)
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!(
                "Failed to delete registrations: {e}"
            ))
        })?
        .rows_affected;

    txn.commit()
        .await
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Commit failed: {e}")))?;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        deleted_users,
        deleted_registrations,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/users", web::post().to(seed_user))
            .route("/cleanup/{marker}", web::delete().to(cleanup_test_data)),
    );
}
