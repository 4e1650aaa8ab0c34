pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

// Test helpers module - only compiled with feature flag
#[cfg(feature = "test-helpers")]
mod test_helpers;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::modules::auth::{
    adapter::{
        incoming::web::SessionCookiePolicy,
        outgoing::{
            jwt::{JwtConfig, JwtTokenService},
            RedisTokenRepository,
        },
    },
    application::{
        auth_use_cases::AuthUseCases,
        domain::AdminCredentials,
        ports::outgoing::TokenProvider,
        services::{LoginAdminService, LogoutAdminService, VerifySessionService},
    },
};
use crate::modules::registration::{
    adapter::outgoing::{RegistrationQueryPostgres, RegistrationRepositoryPostgres},
    application::{
        registration_use_cases::RegistrationUseCases,
        services::{
            ListRegistrationsService, SubmitRegistrationService, UpdateRegistrationStatusService,
        },
    },
};
use crate::modules::user::{
    adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres},
    application::{
        domain::LifecyclePolicy,
        ports::incoming::use_cases::UpdateUserStateUseCase,
        services::{
            ApproveUserService, GetUserService, ListUsersService, RegisterUserService,
            RejectUserService, UnblockUserService, UpdateUserStateService,
        },
        user_use_cases::UserUseCases,
    },
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config as RedisConfig, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub users: UserUseCases,
    pub registrations: RegistrationUseCases,
    pub auth: AuthUseCases,
    pub session_cookie: SessionCookiePolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    config::load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let app_config = AppConfig::from_env().context("Invalid server configuration")?;

    #[cfg(feature = "test-helpers")]
    {
        if app_config.is_production() {
            anyhow::bail!("test-helpers feature enabled in production environment");
        }
        warn!(
            env = %app_config.rust_env,
            "Test helper routes are ENABLED"
        );
    }

    let policy = LifecyclePolicy::from_env().context("Invalid lifecycle policy")?;
    let credentials = AdminCredentials::from_env().context("Invalid admin credentials")?;
    let jwt_config = JwtConfig::from_env().context("Invalid JWT configuration")?;
    info!(mode = ?policy.mode(), approval_target = %policy.approval_target(), "Lifecycle policy loaded");

    // Database connection
    let mut opt = ConnectOptions::new(app_config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if app_config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    } else {
        warn!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = RedisConfig::from_url(&app_config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .context("Failed to create Redis pool")?;
    let redis_arc = Arc::new(redis_pool);

    let state = AppState {
        users: build_user_use_cases(&db_arc, policy),
        registrations: build_registration_use_cases(&db_arc),
        auth: build_auth_use_cases(credentials, jwt_config, &redis_arc),
        session_cookie: SessionCookiePolicy::for_environment(&app_config.rust_env),
    };

    let server_url = app_config.server_url();
    info!(%server_url, env = %app_config.rust_env, "Server listening");

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        #[allow(unused_mut)]
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            );

        // Conditionally add test routes
        #[cfg(feature = "test-helpers")]
        {
            app = app.configure(test_helpers::configure_routes);
        }

        app
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn build_user_use_cases(db: &Arc<DatabaseConnection>, policy: LifecyclePolicy) -> UserUseCases {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));

    let update_state: Arc<dyn UpdateUserStateUseCase + Send + Sync> = Arc::new(
        UpdateUserStateService::new(user_query.clone(), user_repo.clone(), policy),
    );

    UserUseCases {
        list: Arc::new(ListUsersService::new(user_query.clone())),
        get: Arc::new(GetUserService::new(user_query.clone())),
        approve: Arc::new(ApproveUserService::new(Arc::clone(&update_state), &policy)),
        reject: Arc::new(RejectUserService::new(Arc::clone(&update_state))),
        unblock: Arc::new(UnblockUserService::new(Arc::clone(&update_state))),
        update_state,
        register: Arc::new(RegisterUserService::new(user_query, user_repo)),
    }
}

#[cfg(not(tarpaulin_include))]
fn build_registration_use_cases(db: &Arc<DatabaseConnection>) -> RegistrationUseCases {
    let query = RegistrationQueryPostgres::new(Arc::clone(db));
    let repo = RegistrationRepositoryPostgres::new(Arc::clone(db));

    RegistrationUseCases {
        submit: Arc::new(SubmitRegistrationService::new(query.clone(), repo.clone())),
        list: Arc::new(ListRegistrationsService::new(query)),
        update_status: Arc::new(UpdateRegistrationStatusService::new(repo)),
    }
}

#[cfg(not(tarpaulin_include))]
fn build_auth_use_cases(
    credentials: AdminCredentials,
    jwt_config: JwtConfig,
    redis: &Arc<deadpool_redis::Pool>,
) -> AuthUseCases {
    let token_provider: Arc<dyn TokenProvider> = Arc::new(JwtTokenService::new(jwt_config));
    let revoked_tokens = RedisTokenRepository::new(Arc::clone(redis));

    AuthUseCases {
        login: Arc::new(LoginAdminService::new(
            credentials,
            Arc::clone(&token_provider),
        )),
        logout: Arc::new(LogoutAdminService::new(
            Arc::clone(&token_provider),
            revoked_tokens.clone(),
        )),
        verify_session: Arc::new(VerifySessionService::new(token_provider, revoked_tokens)),
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::auth::adapter::incoming::web::routes as auth_routes;
    use crate::modules::registration::adapter::incoming::web::routes as registration_routes;
    use crate::modules::user::adapter::incoming::web::routes as user_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Admin auth
    cfg.service(auth_routes::login_admin_handler);
    cfg.service(auth_routes::logout_admin_handler);
    cfg.service(auth_routes::session_status_handler);
    // Users
    cfg.service(user_routes::list_users_handler);
    cfg.service(user_routes::get_user_handler);
    cfg.service(user_routes::update_user_state_handler);
    cfg.service(user_routes::approve_user_handler);
    cfg.service(user_routes::reject_user_handler);
    cfg.service(user_routes::unblock_user_handler);
    cfg.service(user_routes::register_user_handler);
    // Legacy registrations
    cfg.service(registration_routes::submit_registration_handler);
    cfg.service(registration_routes::list_registrations_handler);
    cfg.service(registration_routes::update_registration_status_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
