//! Headless viewport.
//!
//! Stands in for the browser's intersection observer: elements are laid out
//! as vertical boxes, the viewport scrolls, and observed elements are
//! reported whenever they cross their threshold.

pub mod layout_viewport;

pub use layout_viewport::{intersection_ratio, ElementBox, LayoutViewport};
