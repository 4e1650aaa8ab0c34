use chrono::{TimeZone, Utc};

use crate::modules::registration::application::domain::{
    Registration, RegistrationId, RegistrationStatus,
};

pub fn sample_registration(id: i32, email: &str, whatsapp_number: &str) -> Registration {
    let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();

    Registration {
        id: RegistrationId::from(id),
        full_name: "Neema Mushi".to_string(),
        school_name: "Kibaha Secondary".to_string(),
        email: email.to_string(),
        whatsapp_number: whatsapp_number.to_string(),
        status: RegistrationStatus::Pending,
        created_at,
        updated_at: created_at,
    }
}
