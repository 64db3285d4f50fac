//! Project list load state machine.
//!
//! Defines a pure state transition function for the one-shot project list load.

use serde::Serialize;
use thiserror::Error;

use super::display_list::DisplayList;
use super::error::ProjectLoadError;

/// Status of the project list load.
///
/// Exactly one of loading / error / data is meaningful at a time; the enum
/// makes the other combinations unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum LoadState {
    /// Mounted, request not issued yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Request succeeded.
    Loaded(DisplayList),
    /// Request failed; carries the user-facing message.
    Failed(String),
}

impl LoadState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "failed",
        }
    }

    /// `Idle` counts as loading: the request starts on mount.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn projects(&self) -> Option<&DisplayList> {
        match self {
            Self::Loaded(list) => Some(list),
            _ => None,
        }
    }

    /// `Loaded` and `Failed` have no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }
}

/// Events that drive the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadEvent {
    /// The request was issued.
    Start,
    /// The response parsed into a display list.
    Succeeded(DisplayList),
    /// Transport, status or parse failure.
    Failed(ProjectLoadError),
}

impl LoadEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadStateError {
    #[error("invalid load transition: {event} while {from}")]
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },
}

/// Pure load state machine.
pub struct LoadStateMachine;

impl LoadStateMachine {
    pub fn transition(state: &LoadState, event: LoadEvent) -> Result<LoadState, LoadStateError> {
        match (state, event) {
            (LoadState::Idle, LoadEvent::Start) => Ok(LoadState::Loading),
            (LoadState::Loading, LoadEvent::Succeeded(list)) => Ok(LoadState::Loaded(list)),
            (LoadState::Loading, LoadEvent::Failed(err)) => {
                Ok(LoadState::Failed(err.user_message()))
            }
            (state, event) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    from = state.name(),
                    event = event.name(),
                    "Rejected project list load transition"
                );
                Err(LoadStateError::InvalidTransition {
                    from: state.name(),
                    event: event.name(),
                })
            }
        }
    }
}
