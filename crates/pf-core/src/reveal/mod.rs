//! Reveal-on-scroll domain.
//!
//! An element is revealed the first time enough of it enters the viewport,
//! and stays revealed for as long as it is mounted.

use serde::{Deserialize, Serialize};

use crate::ids::ElementId;

/// Visible-area fraction an element must reach to be revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One visibility observation delivered by the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub element: ElementId,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(element: ElementId, intersection_ratio: f64) -> Self {
        Self {
            element,
            intersection_ratio,
            is_intersecting: intersection_ratio > 0.0,
        }
    }

    /// Whether this observation qualifies the element for reveal.
    pub fn reaches(&self, threshold: f64) -> bool {
        self.is_intersecting && self.intersection_ratio >= threshold
    }
}

/// Per-element one-shot flag: `false` until first qualifying intersection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Marks the element revealed. Returns `true` only on the first call.
    pub fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.revealed, true)
    }
}
