pub mod transition_policy;

pub use transition_policy::{
    LifecyclePolicy, LifecyclePolicyError, TransitionDenied, TransitionMode,
};
