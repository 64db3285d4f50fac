//! Reveal-on-scroll: one-shot visibility flags for mounted elements

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pf_core::ids::ElementId;
use pf_core::ports::VisibilityObserverPort;
use pf_core::reveal::{IntersectionEntry, RevealState, REVEAL_THRESHOLD};
use tracing::{debug, trace};

/// Marks each registered element revealed the first time it crosses
/// [`REVEAL_THRESHOLD`], then stops observing it.
///
/// ## Behavior
/// - `register()` asks the viewport to observe the element and returns a
///   [`RevealSubscription`] owned by whoever mounted the element
/// - `handle_intersections()` flips the flag once per element and unobserves it
/// - Dropping the subscription cancels observation; cancel is idempotent
///
/// The animator only produces the boolean; applying a transition is the
/// presentation layer's job.
pub struct VisibilityAnimator {
    inner: Arc<AnimatorInner>,
}

struct AnimatorInner {
    observer: Arc<dyn VisibilityObserverPort>,
    tracked: Mutex<HashMap<ElementId, Tracked>>,
    next_token: AtomicU64,
}

struct Tracked {
    token: u64,
    reveal: RevealState,
    observing: bool,
}

impl AnimatorInner {
    fn tracked(&self) -> MutexGuard<'_, HashMap<ElementId, Tracked>> {
        self.tracked.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cancel(&self, element: &ElementId, token: u64) {
        let still_observing = {
            let mut tracked = self.tracked();
            match tracked.get(element) {
                Some(entry) if entry.token == token => {
                    let observing = entry.observing;
                    tracked.remove(element);
                    observing
                }
                // Re-registered since, or already cancelled.
                _ => false,
            }
        };

        if still_observing {
            self.observer.unobserve(element);
        }
        trace!(element = %element, still_observing, "Reveal subscription cancelled");
    }
}

impl VisibilityAnimator {
    pub fn new(observer: Arc<dyn VisibilityObserverPort>) -> Self {
        Self {
            inner: Arc::new(AnimatorInner {
                observer,
                tracked: Mutex::new(HashMap::new()),
                next_token: AtomicU64::new(1),
            }),
        }
    }

    /// Register interest in an element's visibility.
    ///
    /// `None` stands for an element that is not mounted; nothing is observed
    /// and no subscription is returned. Registering an element that is
    /// already tracked starts over with a fresh, unrevealed state.
    pub fn register(&self, element: Option<ElementId>) -> Option<RevealSubscription> {
        let Some(element) = element else {
            debug!("Skipping reveal registration for unmounted element");
            return None;
        };

        let token = self.inner.next_token.fetch_add(1, Ordering::Relaxed);
        self.inner.tracked().insert(
            element.clone(),
            Tracked {
                token,
                reveal: RevealState::default(),
                observing: true,
            },
        );
        self.inner.observer.observe(&element, REVEAL_THRESHOLD);
        debug!(element = %element, "Observing element for reveal");

        Some(RevealSubscription {
            element,
            token,
            inner: Some(self.inner.clone()),
        })
    }

    /// Apply a batch of viewport observations.
    ///
    /// # Returns
    /// Elements revealed by this batch, in input order. Entries for unknown
    /// or already revealed elements are ignored.
    pub fn handle_intersections(&self, entries: &[IntersectionEntry]) -> Vec<ElementId> {
        let mut revealed = Vec::new();
        {
            let mut tracked = self.inner.tracked();
            for entry in entries {
                let Some(state) = tracked.get_mut(&entry.element) else {
                    trace!(element = %entry.element, "Intersection for untracked element");
                    continue;
                };
                if !entry.reaches(REVEAL_THRESHOLD) {
                    continue;
                }
                if state.reveal.reveal() {
                    state.observing = false;
                    revealed.push(entry.element.clone());
                }
            }
        }

        for element in &revealed {
            self.inner.observer.unobserve(element);
            debug!(element = %element, "Element revealed");
        }
        revealed
    }

    pub fn is_revealed(&self, element: &ElementId) -> bool {
        self.inner
            .tracked()
            .get(element)
            .is_some_and(|state| state.reveal.is_revealed())
    }

    /// Number of elements currently registered.
    pub fn tracked_count(&self) -> usize {
        self.inner.tracked().len()
    }
}

/// Ownership of one element's observation.
///
/// Dropping the handle cancels the observation so the animator never acts
/// on a detached element.
pub struct RevealSubscription {
    element: ElementId,
    token: u64,
    inner: Option<Arc<AnimatorInner>>,
}

impl RevealSubscription {
    pub fn is_revealed(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| {
            inner
                .tracked()
                .get(&self.element)
                .is_some_and(|state| state.token == self.token && state.reveal.is_revealed())
        })
    }

    /// Stop observing the element. Safe to call more than once.
    pub fn cancel(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.cancel(&self.element, self.token);
        }
    }
}

impl Drop for RevealSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for RevealSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealSubscription")
            .field("element", &self.element)
            .field("active", &self.inner.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Observer {}

        impl VisibilityObserverPort for Observer {
            fn observe(&self, element: &ElementId, threshold: f64);
            fn unobserve(&self, element: &ElementId);
        }
    }

    fn permissive_observer() -> MockObserver {
        let mut observer = MockObserver::new();
        observer.expect_observe().returning(|_, _| ());
        observer.expect_unobserve().returning(|_| ());
        observer
    }

    fn hit(id: &str, ratio: f64) -> IntersectionEntry {
        IntersectionEntry::new(ElementId::from(id), ratio)
    }

    #[test]
    fn test_register_observes_at_threshold() {
        let mut observer = MockObserver::new();
        observer
            .expect_observe()
            .with(eq(ElementId::from("card")), eq(REVEAL_THRESHOLD))
            .times(1)
            .returning(|_, _| ());
        observer.expect_unobserve().returning(|_| ());

        let animator = VisibilityAnimator::new(Arc::new(observer));
        let sub = animator.register(Some(ElementId::from("card"))).unwrap();
        assert!(!sub.is_revealed());
    }

    #[test]
    fn test_missing_element_is_skipped() {
        let mut observer = MockObserver::new();
        observer.expect_observe().never();

        let animator = VisibilityAnimator::new(Arc::new(observer));
        assert!(animator.register(None).is_none());
        assert_eq!(animator.tracked_count(), 0);
    }

    #[test]
    fn test_reveal_unobserves_exactly_once() {
        let mut observer = MockObserver::new();
        observer.expect_observe().returning(|_, _| ());
        observer
            .expect_unobserve()
            .with(eq(ElementId::from("card")))
            .times(1)
            .returning(|_| ());

        let animator = VisibilityAnimator::new(Arc::new(observer));
        let sub = animator.register(Some(ElementId::from("card"))).unwrap();

        assert_eq!(animator.handle_intersections(&[hit("card", 0.5)]), [ElementId::from("card")]);
        // leaves and re-enters: no second reveal, no second unobserve
        assert!(animator.handle_intersections(&[hit("card", 0.0)]).is_empty());
        assert!(animator.handle_intersections(&[hit("card", 0.9)]).is_empty());
        assert!(sub.is_revealed());

        // already unobserved, so dropping must not unobserve again
        drop(sub);
    }

    #[test]
    fn test_below_threshold_does_not_reveal() {
        let animator = VisibilityAnimator::new(Arc::new(permissive_observer()));
        let _sub = animator.register(Some(ElementId::from("card"))).unwrap();

        assert!(animator.handle_intersections(&[hit("card", 0.05)]).is_empty());
        assert!(!animator.is_revealed(&ElementId::from("card")));
    }

    #[test]
    fn test_never_intersecting_element_stays_hidden() {
        let animator = VisibilityAnimator::new(Arc::new(permissive_observer()));
        let _far = animator.register(Some(ElementId::from("far"))).unwrap();
        let _near = animator.register(Some(ElementId::from("near"))).unwrap();

        for _ in 0..3 {
            animator.handle_intersections(&[hit("near", 1.0)]);
        }

        assert!(animator.is_revealed(&ElementId::from("near")));
        assert!(!animator.is_revealed(&ElementId::from("far")));
    }

    #[test]
    fn test_elements_reveal_independently_in_one_batch() {
        let animator = VisibilityAnimator::new(Arc::new(permissive_observer()));
        let _a = animator.register(Some(ElementId::from("a"))).unwrap();
        let _b = animator.register(Some(ElementId::from("b"))).unwrap();
        let _c = animator.register(Some(ElementId::from("c"))).unwrap();

        let revealed =
            animator.handle_intersections(&[hit("a", 0.2), hit("b", 0.01), hit("c", 1.0), hit("a", 1.0)]);

        assert_eq!(revealed, [ElementId::from("a"), ElementId::from("c")]);
        assert!(!animator.is_revealed(&ElementId::from("b")));
    }

    #[test]
    fn test_drop_unobserves_unrevealed_element() {
        let mut observer = MockObserver::new();
        observer.expect_observe().returning(|_, _| ());
        observer
            .expect_unobserve()
            .with(eq(ElementId::from("card")))
            .times(1)
            .returning(|_| ());

        let animator = VisibilityAnimator::new(Arc::new(observer));
        let sub = animator.register(Some(ElementId::from("card"))).unwrap();
        drop(sub);

        assert_eq!(animator.tracked_count(), 0);
        // observations for a detached element are ignored
        assert!(animator.handle_intersections(&[hit("card", 1.0)]).is_empty());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut observer = MockObserver::new();
        observer.expect_observe().returning(|_, _| ());
        observer.expect_unobserve().times(1).returning(|_| ());

        let animator = VisibilityAnimator::new(Arc::new(observer));
        let mut sub = animator.register(Some(ElementId::from("card"))).unwrap();
        sub.cancel();
        sub.cancel();
        drop(sub);
    }

    #[test]
    fn test_stale_subscription_does_not_cancel_remount() {
        let animator = VisibilityAnimator::new(Arc::new(permissive_observer()));
        let old = animator.register(Some(ElementId::from("card"))).unwrap();
        let fresh = animator.register(Some(ElementId::from("card"))).unwrap();

        drop(old);
        assert_eq!(animator.tracked_count(), 1);

        animator.handle_intersections(&[hit("card", 1.0)]);
        assert!(fresh.is_revealed());
    }
}
