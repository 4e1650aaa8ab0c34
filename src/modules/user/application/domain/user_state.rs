use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Lifecycle state of a user, stored as a bounded string in `users.state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserState {
    New,
    InReview,
    Onboarding,
    Active,
    Inactive,
    Blocked,
    RateLimited,
}

impl UserState {
    pub const ALL: [UserState; 7] = [
        UserState::New,
        UserState::InReview,
        UserState::Onboarding,
        UserState::Active,
        UserState::Inactive,
        UserState::Blocked,
        UserState::RateLimited,
    ];

    /// State assigned to self-registered users.
    pub const INITIAL: UserState = UserState::InReview;

    pub fn as_str(&self) -> &'static str {
        match self {
            UserState::New => "new",
            UserState::InReview => "in_review",
            UserState::Onboarding => "onboarding",
            UserState::Active => "active",
            UserState::Inactive => "inactive",
            UserState::Blocked => "blocked",
            UserState::RateLimited => "rate_limited",
        }
    }

    /// Admin actions the review UI should offer for a user in this state.
    pub fn offered_actions(&self) -> Vec<AdminAction> {
        let mut actions = Vec::new();

        if *self == UserState::InReview {
            actions.push(AdminAction::Approve);
        }

        if *self == UserState::Blocked {
            actions.push(AdminAction::Unblock);
        } else {
            actions.push(AdminAction::Block);
        }

        actions
    }
}

impl fmt::Display for UserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} value: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for UserState {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "state",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    Approve,
    Block,
    Unblock,
}
