use std::str::FromStr;

use crate::modules::user::application::domain::user_state::{UnknownVariant, UserState};

/// How strictly admin-requested state changes are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    /// Only edges of the review workflow are allowed.
    #[default]
    Guarded,
    /// Any state may be set from any state.
    Permissive,
}

impl FromStr for TransitionMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "guarded" => Ok(TransitionMode::Guarded),
            "permissive" => Ok(TransitionMode::Permissive),
            other => Err(UnknownVariant {
                kind: "transition policy",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Transition from '{from}' to '{to}' is not allowed")]
pub struct TransitionDenied {
    pub from: UserState,
    pub to: UserState,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifecyclePolicyError {
    #[error("Approval target must be 'active' or 'new', got '{0}'")]
    UnsupportedApprovalTarget(String),

    #[error(transparent)]
    UnknownValue(#[from] UnknownVariant),
}

/// Rules applied by every admin state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicy {
    mode: TransitionMode,
    approval_target: UserState,
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self {
            mode: TransitionMode::Guarded,
            approval_target: UserState::Active,
        }
    }
}

impl LifecyclePolicy {
    pub const APPROVAL_TARGETS: [UserState; 2] = [UserState::Active, UserState::New];

    pub fn new(
        mode: TransitionMode,
        approval_target: UserState,
    ) -> Result<Self, LifecyclePolicyError> {
        if !Self::APPROVAL_TARGETS.contains(&approval_target) {
            return Err(LifecyclePolicyError::UnsupportedApprovalTarget(
                approval_target.to_string(),
            ));
        }

        Ok(Self {
            mode,
            approval_target,
        })
    }

    /// Reads `TRANSITION_POLICY` (guarded | permissive) and
    /// `APPROVAL_TARGET_STATE` (active | new). Unset values use the defaults.
    pub fn from_env() -> Result<Self, LifecyclePolicyError> {
        let mode = match std::env::var("TRANSITION_POLICY") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse::<TransitionMode>()?,
            _ => TransitionMode::default(),
        };

        let approval_target = match std::env::var("APPROVAL_TARGET_STATE") {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<UserState>()?,
            _ => UserState::Active,
        };

        Self::new(mode, approval_target)
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn approval_target(&self) -> UserState {
        self.approval_target
    }

    pub fn check(&self, from: UserState, to: UserState) -> Result<(), TransitionDenied> {
        let allowed = match self.mode {
            TransitionMode::Permissive => true,
            TransitionMode::Guarded => guarded_targets(from).contains(&to),
        };

        if allowed {
            Ok(())
        } else {
            Err(TransitionDenied { from, to })
        }
    }
}

fn guarded_targets(from: UserState) -> &'static [UserState] {
    use UserState::*;

    match from {
        New => &[InReview, Onboarding, Active, Blocked],
        InReview => &[New, Onboarding, Active, Blocked],
        Onboarding => &[Active, Inactive, Blocked],
        Active => &[Inactive, Blocked, RateLimited],
        Inactive => &[Active, Blocked],
        Blocked => &[Active],
        RateLimited => &[Active, Blocked],
    }
}
