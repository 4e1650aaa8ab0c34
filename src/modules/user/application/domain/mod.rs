pub mod entities;
pub mod policies;
pub mod user_filter;
pub mod user_state;

pub use entities::{next_updated_at, ClassInfo, OnboardingState, Role, User, UserId};
pub use user_filter::{StatusFilter, UserFilter};
pub use user_state::{AdminAction, UnknownVariant, UserState};
pub use policies::{LifecyclePolicy, LifecyclePolicyError, TransitionDenied, TransitionMode};
