use crate::modules::registration::application::domain::{
    Registration, RegistrationId, RegistrationStatus,
};

use super::sea_orm_entity::registrations::Model as RegistrationModel;

pub(crate) fn model_to_registration(model: RegistrationModel) -> Result<Registration, String> {
    let status = model
        .status
        .parse::<RegistrationStatus>()
        .map_err(|e| format!("registration {}: {e}", model.id))?;

    Ok(Registration {
        id: RegistrationId::from(model.id),
        full_name: model.full_name,
        school_name: model.school_name,
        email: model.email,
        whatsapp_number: model.whatsapp_number,
        status,
        created_at: model.created_at.and_utc(),
        updated_at: model.updated_at.and_utc(),
    })
}
