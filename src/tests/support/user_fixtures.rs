use chrono::{TimeZone, Utc};

use crate::modules::user::application::domain::{
    OnboardingState, Role, User, UserId, UserState,
};

pub fn sample_user(id: i32, wa_id: &str, state: UserState) -> User {
    let created_at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();

    User {
        id: UserId::from(id),
        wa_id: wa_id.to_string(),
        name: Some("Amina Hassan".to_string()),
        school_name: Some("Azania Secondary".to_string()),
        region: Some("Dar es Salaam".to_string()),
        birthday: None,
        role: Role::Teacher,
        onboarding_state: Some(OnboardingState::New),
        state,
        class_info: None,
        last_message_at: None,
        created_at,
        updated_at: created_at,
    }
}
