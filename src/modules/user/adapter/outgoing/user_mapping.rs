use tracing::warn;

use crate::modules::user::application::domain::{
    ClassInfo, OnboardingState, Role, UnknownVariant, User, UserId, UserState,
};

use super::sea_orm_entity::users::Model as UserModel;

/// Converts a stored row into the domain type. Any enumeration column holding
/// an unknown value makes the whole record corrupt.
pub(crate) fn model_to_user(model: UserModel) -> Result<User, String> {
    let id = model.id;
    let corrupt = |e: UnknownVariant| format!("user {id}: {e}");

    let state = model.state.parse::<UserState>().map_err(corrupt)?;
    let role = model.role.parse::<Role>().map_err(corrupt)?;
    let onboarding_state = model
        .onboarding_state
        .as_deref()
        .map(str::parse::<OnboardingState>)
        .transpose()
        .map_err(corrupt)?;

    let class_info = model.class_info.and_then(|raw| {
        serde_json::from_value::<ClassInfo>(raw)
            .inspect_err(|e| warn!(user_id = id, error = %e, "Ignoring malformed class_info"))
            .ok()
    });

    Ok(User {
        id: UserId::from(model.id),
        wa_id: model.wa_id,
        name: model.name,
        school_name: model.school_name,
        region: model.region,
        birthday: model.birthday,
        role,
        onboarding_state,
        state,
        class_info,
        last_message_at: model.last_message_at.map(Into::into),
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}
