use crate::ids::ElementId;

/// Host-side visibility observer (the viewport).
///
/// The host reports observations back through
/// `VisibilityAnimator::handle_intersections`.
///
/// # Behavior
/// - `observe()` and `unobserve()` are idempotent.
/// - `unobserve()` of an element that is not observed is a no-op.
pub trait VisibilityObserverPort: Send + Sync {
    /// Start reporting intersections for `element` at `threshold`.
    fn observe(&self, element: &ElementId, threshold: f64);

    /// Stop reporting intersections for `element`.
    fn unobserve(&self, element: &ElementId);
}
