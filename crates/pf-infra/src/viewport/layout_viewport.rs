use pf_core::ports::VisibilityObserverPort;
use pf_core::{ElementId, IntersectionEntry};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tracing::trace;

/// Vertical extent of a laid-out element, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Fraction of `element` visible in a viewport spanning
/// `scroll_top..scroll_top + viewport_height`.
///
/// A zero-height element counts as fully visible while its top edge lies
/// inside the viewport.
pub fn intersection_ratio(element: ElementBox, scroll_top: f64, viewport_height: f64) -> f64 {
    let view_bottom = scroll_top + viewport_height;

    if element.height <= 0.0 {
        let inside = element.top >= scroll_top && element.top < view_bottom;
        return if inside { 1.0 } else { 0.0 };
    }

    let visible = element.bottom().min(view_bottom) - element.top.max(scroll_top);
    (visible.max(0.0) / element.height).clamp(0.0, 1.0)
}

struct Observation {
    element: ElementId,
    threshold: f64,
    /// Threshold state at the last report; `None` until first reported.
    reached: Option<bool>,
}

#[derive(Default)]
struct ViewportState {
    scroll_top: f64,
    boxes: HashMap<ElementId, ElementBox>,
    /// Kept in observe order so reports are deterministic.
    observed: Vec<Observation>,
}

/// Layout-model viewport implementing [`VisibilityObserverPort`].
///
/// Observation only records interest. Entries are produced by
/// [`LayoutViewport::scroll_to`] and [`LayoutViewport::refresh`], and the
/// host hands them to the animator. The first computation after an element is
/// observed always reports it; later ones report only threshold crossings.
pub struct LayoutViewport {
    height: f64,
    state: Mutex<ViewportState>,
}

impl LayoutViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height: height.max(0.0),
            state: Mutex::new(ViewportState::default()),
        }
    }

    pub fn scroll_top(&self) -> f64 {
        self.lock().scroll_top
    }

    /// Place (or move) an element in the layout.
    pub fn place(&self, element: ElementId, element_box: ElementBox) {
        self.lock().boxes.insert(element, element_box);
    }

    /// Remove an element from the layout. Observation is left untouched.
    pub fn remove(&self, element: &ElementId) {
        self.lock().boxes.remove(element);
    }

    pub fn is_observed(&self, element: &ElementId) -> bool {
        self.lock().observed.iter().any(|o| &o.element == element)
    }

    pub fn observed_count(&self) -> usize {
        self.lock().observed.len()
    }

    /// Scroll to `offset` and return the entries due for delivery.
    pub fn scroll_to(&self, offset: f64) -> Vec<IntersectionEntry> {
        let mut state = self.lock();
        state.scroll_top = offset.max(0.0);
        Self::collect_entries(&mut state, self.height)
    }

    /// Recompute at the current offset, e.g. after layout changes.
    pub fn refresh(&self) -> Vec<IntersectionEntry> {
        let mut state = self.lock();
        Self::collect_entries(&mut state, self.height)
    }

    fn collect_entries(state: &mut ViewportState, height: f64) -> Vec<IntersectionEntry> {
        let ViewportState {
            scroll_top,
            boxes,
            observed,
        } = state;

        let mut entries = Vec::new();
        for observation in observed.iter_mut() {
            // Not laid out yet: nothing to report.
            let Some(element_box) = boxes.get(&observation.element) else {
                continue;
            };

            let ratio = intersection_ratio(*element_box, *scroll_top, height);
            let entry = IntersectionEntry::new(observation.element.clone(), ratio);
            let reached = entry.reaches(observation.threshold);

            if observation.reached != Some(reached) {
                observation.reached = Some(reached);
                trace!(element = %entry.element, ratio, reached, "Intersection changed");
                entries.push(entry);
            }
        }
        entries
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ViewportState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl VisibilityObserverPort for LayoutViewport {
    fn observe(&self, element: &ElementId, threshold: f64) {
        let mut state = self.lock();
        if let Some(existing) = state.observed.iter_mut().find(|o| &o.element == element) {
            existing.threshold = threshold;
            return;
        }
        state.observed.push(Observation {
            element: element.clone(),
            threshold,
            reached: None,
        });
    }

    fn unobserve(&self, element: &ElementId) {
        self.lock().observed.retain(|o| &o.element != element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::REVEAL_THRESHOLD;

    fn id(s: &str) -> ElementId {
        ElementId::from(s)
    }

    #[test]
    fn test_ratio_partial_full_and_outside() {
        let card = ElementBox::new(100.0, 100.0);
        assert_eq!(intersection_ratio(card, 0.0, 150.0), 0.5);
        assert_eq!(intersection_ratio(card, 0.0, 500.0), 1.0);
        assert_eq!(intersection_ratio(card, 300.0, 500.0), 0.0);
        assert_eq!(intersection_ratio(card, 0.0, 100.0), 0.0);
    }

    #[test]
    fn test_ratio_zero_height_element() {
        let marker = ElementBox::new(50.0, 0.0);
        assert_eq!(intersection_ratio(marker, 0.0, 100.0), 1.0);
        assert_eq!(intersection_ratio(marker, 60.0, 100.0), 0.0);
    }

    #[test]
    fn test_first_computation_reports_every_laid_out_element() {
        let viewport = LayoutViewport::new(100.0);
        viewport.place(id("a"), ElementBox::new(0.0, 50.0));
        viewport.place(id("b"), ElementBox::new(500.0, 50.0));
        viewport.observe(&id("a"), REVEAL_THRESHOLD);
        viewport.observe(&id("b"), REVEAL_THRESHOLD);
        viewport.observe(&id("unplaced"), REVEAL_THRESHOLD);

        let entries = viewport.refresh();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].element, id("a"));
        assert!(entries[0].reaches(REVEAL_THRESHOLD));
        assert_eq!(entries[1].element, id("b"));
        assert!(!entries[1].is_intersecting);
    }

    #[test]
    fn test_reports_only_threshold_crossings() {
        let viewport = LayoutViewport::new(100.0);
        viewport.place(id("card"), ElementBox::new(200.0, 100.0));
        viewport.observe(&id("card"), REVEAL_THRESHOLD);

        assert_eq!(viewport.scroll_to(0.0).len(), 1);
        // Still out of view.
        assert!(viewport.scroll_to(50.0).is_empty());
        // 5% visible: below threshold, no change.
        assert!(viewport.scroll_to(105.0).is_empty());

        let entered = viewport.scroll_to(150.0);
        assert_eq!(entered.len(), 1);
        assert!(entered[0].reaches(REVEAL_THRESHOLD));

        // Moving within view does not re-report.
        assert!(viewport.scroll_to(180.0).is_empty());

        let left = viewport.scroll_to(0.0);
        assert_eq!(left.len(), 1);
        assert!(!left[0].reaches(REVEAL_THRESHOLD));
        assert_eq!(viewport.scroll_top(), 0.0);
    }

    #[test]
    fn test_unobserved_elements_are_silent() {
        let viewport = LayoutViewport::new(100.0);
        viewport.place(id("card"), ElementBox::new(0.0, 10.0));
        viewport.observe(&id("card"), REVEAL_THRESHOLD);
        viewport.observe(&id("card"), REVEAL_THRESHOLD);
        assert_eq!(viewport.observed_count(), 1);

        viewport.unobserve(&id("card"));
        viewport.unobserve(&id("card"));

        assert!(!viewport.is_observed(&id("card")));
        assert!(viewport.refresh().is_empty());
    }

    #[test]
    fn test_removed_element_stops_reporting() {
        let viewport = LayoutViewport::new(100.0);
        viewport.place(id("card"), ElementBox::new(300.0, 10.0));
        viewport.observe(&id("card"), REVEAL_THRESHOLD);
        assert_eq!(viewport.refresh().len(), 1);

        viewport.remove(&id("card"));
        assert!(viewport.scroll_to(300.0).is_empty());
        assert!(viewport.is_observed(&id("card")));
    }
}
