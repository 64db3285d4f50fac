//! Projects section.
//!
//! Renders exactly one of: the loading indicator, the error text, or the
//! project cards. `Idle` counts as loading since the load starts on mount.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use pf_core::{ElementId, LoadState, RepositorySummary};

use super::format::OutputFormat;

pub const LOADING_TEXT: &str = "Loading projects…";

/// Element id of a project's card, as registered with the animator.
pub fn card_element_id(repo: &RepositorySummary) -> ElementId {
    ElementId::from(format!("project-{}", repo.id))
}

/// Render the section for `state`. `is_revealed` decides which cards carry
/// the `is-visible` class (HTML) or reveal marker (text).
pub fn render_projects(
    state: &LoadState,
    format: OutputFormat,
    is_revealed: impl Fn(&ElementId) -> bool,
) -> String {
    match format {
        OutputFormat::Html => render_html(state, is_revealed),
        OutputFormat::Text => render_text(state, is_revealed),
    }
}

fn render_html(state: &LoadState, is_revealed: impl Fn(&ElementId) -> bool) -> String {
    let mut out = String::from("<section id=\"projects\" class=\"projects\">\n");

    match state {
        LoadState::Idle | LoadState::Loading => {
            let _ = writeln!(
                out,
                "  <p class=\"projects-status\" role=\"status\">{LOADING_TEXT}</p>"
            );
        }
        LoadState::Failed(message) => {
            let _ = writeln!(
                out,
                "  <p class=\"projects-error\" role=\"alert\">{}</p>",
                encode_text(message)
            );
        }
        LoadState::Loaded(list) => {
            out.push_str("  <div class=\"projects-grid\">\n");
            for repo in list {
                render_card_html(&mut out, repo, is_revealed(&card_element_id(repo)));
            }
            out.push_str("  </div>\n");
        }
    }

    out.push_str("</section>\n");
    out
}

fn render_card_html(out: &mut String, repo: &RepositorySummary, revealed: bool) {
    let id = card_element_id(repo);
    let class = if revealed {
        "project-card is-visible"
    } else {
        "project-card"
    };

    let _ = writeln!(
        out,
        "    <article id=\"{}\" class=\"{class}\">",
        encode_double_quoted_attribute(id.as_str())
    );
    let _ = writeln!(
        out,
        "      <h3><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a></h3>",
        encode_double_quoted_attribute(&repo.url),
        encode_text(&repo.name)
    );
    if let Some(description) = repo.description() {
        let _ = writeln!(out, "      <p>{}</p>", encode_text(description));
    }
    let topics = repo.topic_labels();
    if !topics.is_empty() {
        out.push_str("      <ul class=\"topics\">");
        for topic in topics {
            let _ = write!(out, "<li>{}</li>", encode_text(topic));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("    </article>\n");
}

fn render_text(state: &LoadState, is_revealed: impl Fn(&ElementId) -> bool) -> String {
    match state {
        LoadState::Idle | LoadState::Loading => format!("{LOADING_TEXT}\n"),
        LoadState::Failed(message) => format!("{message}\n"),
        LoadState::Loaded(list) => {
            let mut out = String::new();
            for repo in list {
                let marker = if is_revealed(&card_element_id(repo)) {
                    "*"
                } else {
                    "-"
                };
                let _ = writeln!(out, "{marker} {} <{}>", repo.name, repo.url);
                if let Some(description) = repo.description() {
                    let _ = writeln!(out, "    {description}");
                }
                let topics = repo.topic_labels();
                if !topics.is_empty() {
                    let _ = writeln!(out, "    [{}]", topics.join(", "));
                }
            }
            out
        }
    }
}
