pub mod visibility_animator;

pub use visibility_animator::{RevealSubscription, VisibilityAnimator};
