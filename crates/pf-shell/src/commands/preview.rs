//! Scroll preview: lays the project cards out below the fold, scrolls the
//! viewport through the given offsets and records which cards reveal.

use std::fmt::Write;

use pf_app::usecase_factory;
use pf_core::{ElementId, LoadState};
use pf_infra::ElementBox;
use tracing::{debug, info_span, Instrument};

use crate::bootstrap::Wiring;
use crate::presentation::{card_element_id, render_projects, OutputFormat};

/// Vertical placement of the cards, one per row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    /// Document offset of the first card.
    pub section_top: f64,
    pub card_height: f64,
    pub gap: f64,
}

impl Default for PreviewLayout {
    fn default() -> Self {
        Self {
            section_top: 900.0,
            card_height: 320.0,
            gap: 24.0,
        }
    }
}

impl PreviewLayout {
    pub fn card_box(&self, index: usize) -> ElementBox {
        let top = self.section_top + index as f64 * (self.card_height + self.gap);
        ElementBox::new(top, self.card_height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewStep {
    pub offset: f64,
    pub revealed: Vec<ElementId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewReport {
    pub state: LoadState,
    pub steps: Vec<PreviewStep>,
    pub rendered: String,
}

impl PreviewReport {
    /// Per-step reveal log followed by the final render.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for step in &self.steps {
            let revealed: Vec<&str> = step.revealed.iter().map(ElementId::as_str).collect();
            let revealed = if revealed.is_empty() {
                "none".to_string()
            } else {
                revealed.join(", ")
            };
            let _ = writeln!(out, "scroll {}: revealed {revealed}", step.offset);
        }
        out.push_str(&self.rendered);
        out
    }
}

/// Load the list, mount the cards and scroll through `offsets`.
///
/// The first step is the mount itself at the current scroll position.
pub async fn run_preview(
    wiring: &Wiring,
    layout: PreviewLayout,
    offsets: &[f64],
    format: OutputFormat,
) -> PreviewReport {
    let span = info_span!("command.preview", steps = offsets.len());
    async {
        let loader = usecase_factory::load_project_list(&wiring.deps);
        let animator = usecase_factory::visibility_animator(&wiring.deps);
        let state = loader.execute().await;

        let mut subscriptions = Vec::new();
        if let Some(list) = state.projects() {
            for (index, repo) in list.iter().enumerate() {
                let element = card_element_id(repo);
                wiring.viewport.place(element.clone(), layout.card_box(index));
                subscriptions.extend(animator.register(Some(element)));
            }
        }

        let mut steps = vec![PreviewStep {
            offset: wiring.viewport.scroll_top(),
            revealed: animator.handle_intersections(&wiring.viewport.refresh()),
        }];
        for &offset in offsets {
            let entries = wiring.viewport.scroll_to(offset);
            let revealed = animator.handle_intersections(&entries);
            debug!(offset, revealed = revealed.len(), "Preview step");
            steps.push(PreviewStep {
                offset: wiring.viewport.scroll_top(),
                revealed,
            });
        }

        let rendered = render_projects(&state, format, |id| animator.is_revealed(id));
        drop(subscriptions);

        PreviewReport {
            state,
            steps,
            rendered,
        }
    }
    .instrument(span)
    .await
}
