use async_trait::async_trait;

use crate::modules::registration::application::domain::{Registration, RegistrationFilter};

/// Storage errors are logged and yield an empty list.
#[async_trait]
pub trait ListRegistrationsUseCase: Send + Sync {
    async fn execute(&self, filter: RegistrationFilter) -> Vec<Registration>;
}
