use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use utoipa::ToSchema;

use super::user_state::{UnknownVariant, UserState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Teacher,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(UnknownVariant {
                kind: "role",
                value: other.to_string(),
            }),
        }
    }
}

/// Progress through the WhatsApp onboarding conversation. Not driven by admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingState {
    New,
    PersonalInfoSubmitted,
    Completed,
}

impl OnboardingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OnboardingState::New => "new",
            OnboardingState::PersonalInfoSubmitted => "personal_info_submitted",
            OnboardingState::Completed => "completed",
        }
    }
}

impl FromStr for OnboardingState {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(OnboardingState::New),
            "personal_info_submitted" => Ok(OnboardingState::PersonalInfoSubmitted),
            "completed" => Ok(OnboardingState::Completed),
            other => Err(UnknownVariant {
                kind: "onboarding_state",
                value: other.to_string(),
            }),
        }
    }
}

/// Subject name -> class identifiers.
pub type ClassInfo = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub wa_id: String,
    pub name: Option<String>,
    pub school_name: Option<String>,
    pub region: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub role: Role,
    pub onboarding_state: Option<OnboardingState>,
    pub state: UserState,
    pub class_info: Option<ClassInfo>,
    pub last_message_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Timestamp for the next mutation of a record last touched at `previous`.
///
/// Strictly greater than `previous` even when the wall clock lags behind it.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let floor = previous + Duration::microseconds(1);
    if now > floor {
        now
    } else {
        floor
    }
}
