use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::registration::application::domain::{Registration, RegistrationStatus};

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationView {
    #[schema(example = 7)]
    pub id: i32,
    #[schema(example = "Neema Mushi")]
    pub full_name: String,
    #[schema(example = "Kibaha Secondary")]
    pub school_name: String,
    #[schema(example = "neema@example.org")]
    pub email: String,
    #[schema(example = "+255711000001")]
    pub whatsapp_number: String,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Registration> for RegistrationView {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id.value(),
            full_name: registration.full_name,
            school_name: registration.school_name,
            email: registration.email,
            whatsapp_number: registration.whatsapp_number,
            status: registration.status,
            created_at: registration.created_at,
            updated_at: registration.updated_at,
        }
    }
}
