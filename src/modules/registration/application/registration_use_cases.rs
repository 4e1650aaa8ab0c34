use std::sync::Arc;

use crate::modules::registration::application::ports::incoming::use_cases::{
    ListRegistrationsUseCase, SubmitRegistrationUseCase, UpdateRegistrationStatusUseCase,
};

#[derive(Clone)]
pub struct RegistrationUseCases {
    pub submit: Arc<dyn SubmitRegistrationUseCase + Send + Sync>,
    pub list: Arc<dyn ListRegistrationsUseCase + Send + Sync>,
    pub update_status: Arc<dyn UpdateRegistrationStatusUseCase + Send + Sync>,
}
