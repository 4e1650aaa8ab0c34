use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::auth::adapter::incoming::web::routes::{
    LoginAdminRequest, LoginAdminResponse, LogoutAdminResponse, SessionStatusResponse,
};
use crate::modules::registration::{
    adapter::incoming::web::routes::{
        RegistrationView, SubmitRegistrationRequest, UpdateRegistrationStatusRequest,
    },
    application::domain::RegistrationStatus,
};
use crate::modules::user::{
    adapter::incoming::web::routes::{RegisterUserRequest, UpdateUserStateRequest, UserView},
    application::domain::{AdminAction, OnboardingState, Role, UserState},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Twiga Admin API",
        version = "1.0.0",
        description = "Moderation of WhatsApp-registered teachers"
    ),
    paths(
        // Admin auth
        crate::modules::auth::adapter::incoming::web::routes::login_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_admin_handler,
        crate::modules::auth::adapter::incoming::web::routes::session_status_handler,

        // Users
        crate::modules::user::adapter::incoming::web::routes::list_users_handler,
        crate::modules::user::adapter::incoming::web::routes::get_user_handler,
        crate::modules::user::adapter::incoming::web::routes::update_user_state_handler,
        crate::modules::user::adapter::incoming::web::routes::approve_user_handler,
        crate::modules::user::adapter::incoming::web::routes::reject_user_handler,
        crate::modules::user::adapter::incoming::web::routes::unblock_user_handler,
        crate::modules::user::adapter::incoming::web::routes::register_user_handler,

        // Legacy registrations
        crate::modules::registration::adapter::incoming::web::routes::submit_registration_handler,
        crate::modules::registration::adapter::incoming::web::routes::list_registrations_handler,
        crate::modules::registration::adapter::incoming::web::routes::update_registration_status_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            LoginAdminRequest,
            LoginAdminResponse,
            LogoutAdminResponse,
            SessionStatusResponse,
            UserView,
            UserState,
            AdminAction,
            Role,
            OnboardingState,
            UpdateUserStateRequest,
            RegisterUserRequest,
            RegistrationView,
            RegistrationStatus,
            SubmitRegistrationRequest,
            UpdateRegistrationStatusRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "admin-auth", description = "Admin login and session"),
        (name = "admin-users", description = "User review and lifecycle changes"),
        (name = "users", description = "Teacher self-registration"),
        (name = "registrations", description = "Legacy registration moderation"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Admin session token from /api/admin/login"))
                        .build(),
                ),
            )
        }
    }
}
