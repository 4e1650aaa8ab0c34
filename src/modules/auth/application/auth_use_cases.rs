use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginAdminUseCase, LogoutAdminUseCase, VerifySessionUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    pub verify_session: Arc<dyn VerifySessionUseCase + Send + Sync>,
}
