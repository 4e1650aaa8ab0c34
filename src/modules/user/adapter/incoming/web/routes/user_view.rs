use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::user::application::domain::{
    AdminAction, ClassInfo, OnboardingState, Role, User, UserState,
};

/// A user row as shown in the admin review table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserView {
    #[schema(example = 17)]
    pub id: i32,
    #[schema(example = "255712345678")]
    pub wa_id: String,
    pub name: Option<String>,
    pub school_name: Option<String>,
    pub region: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub role: Role,
    pub onboarding_state: Option<OnboardingState>,
    pub state: UserState,
    #[schema(value_type = Option<Object>)]
    pub class_info: Option<ClassInfo>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Actions the review UI should offer for the current state
    pub actions: Vec<AdminAction>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        let actions = user.state.offered_actions();

        Self {
            id: user.id.value(),
            wa_id: user.wa_id,
            name: user.name,
            school_name: user.school_name,
            region: user.region,
            birthday: user.birthday,
            role: user.role,
            onboarding_state: user.onboarding_state,
            state: user.state,
            class_info: user.class_info,
            last_message_at: user.last_message_at,
            created_at: user.created_at,
            updated_at: user.updated_at,
            actions,
        }
    }
}
