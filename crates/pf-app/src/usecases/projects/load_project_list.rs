//! Use case for loading the project list shown on the portfolio page

use std::sync::Arc;

use pf_core::ports::RepositorySourcePort;
use pf_core::project::{DisplayList, LoadEvent, LoadState, LoadStateMachine, PORTFOLIO_ACCOUNT};
use tokio::sync::watch;
use tracing::{error, info, info_span, warn, Instrument};

/// Use case for loading the project list.
///
/// ## Behavior
/// - The first `execute()` starts exactly one request through the source port
/// - The request runs in its own task: a caller that stops waiting does not
///   cancel it, and later calls never start another
/// - The state moves `Idle -> Loading -> Loaded | Failed` and stays there
/// - Failures of any kind become `LoadState::Failed(message)`; nothing is fatal
///
/// The rendering layer reads the state with [`LoadProjectList::state`] or
/// follows it with [`LoadProjectList::subscribe`].
pub struct LoadProjectList {
    inner: Arc<LoaderInner>,
}

struct LoaderInner {
    source: Arc<dyn RepositorySourcePort>,
    state: watch::Sender<LoadState>,
}

impl LoadProjectList {
    /// Create a new LoadProjectList use case in the `Idle` state.
    pub fn new(source: Arc<dyn RepositorySourcePort>) -> Self {
        let (state, _) = watch::channel(LoadState::Idle);
        Self {
            inner: Arc::new(LoaderInner { source, state }),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> LoadState {
        self.inner.state.borrow().clone()
    }

    /// Follow state changes.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.inner.state.subscribe()
    }

    /// Execute the use case.
    ///
    /// Must be called within a Tokio runtime.
    ///
    /// # Returns
    /// The terminal state: `Loaded(list)` or `Failed(message)`.
    pub async fn execute(&self) -> LoadState {
        let span = info_span!("usecase.load_project_list.execute");

        async {
            let mut rx = self.subscribe();

            if self.inner.start() {
                let inner = self.inner.clone();
                tokio::spawn(
                    async move { inner.fetch().await }
                        .instrument(info_span!("usecase.load_project_list.fetch")),
                );
            }

            let state = match rx.wait_for(LoadState::is_terminal).await {
                Ok(state) => state.clone(),
                // The sender lives in `inner`, which `self` keeps alive.
                Err(_) => self.state(),
            };
            state
        }
        .instrument(span)
        .await
    }
}

impl LoaderInner {
    /// `Idle -> Loading`. Only the caller that wins this transition fetches.
    fn start(&self) -> bool {
        self.state
            .send_if_modified(|state| match LoadStateMachine::transition(state, LoadEvent::Start) {
                Ok(next) => {
                    *state = next;
                    true
                }
                Err(_) => false,
            })
    }

    async fn fetch(&self) {
        info!(account = PORTFOLIO_ACCOUNT, "Loading project list");

        let event = match self.source.list_repositories().await {
            Ok(repos) => {
                let received = repos.len();
                let list = DisplayList::from_remote(repos);
                info!(received, shown = list.len(), "Project list loaded");
                LoadEvent::Succeeded(list)
            }
            Err(err) => {
                warn!(error = %err, "Project list load failed");
                LoadEvent::Failed(err)
            }
        };

        self.finish(event);
    }

    fn finish(&self, event: LoadEvent) {
        self.state
            .send_if_modified(|state| match LoadStateMachine::transition(state, event) {
                Ok(next) => {
                    *state = next;
                    true
                }
                Err(err) => {
                    // Only the fetch task completes a load, and it runs once.
                    error!(error = %err, "Project list completion rejected");
                    debug_assert!(false, "project list completion rejected: {err}");
                    false
                }
            });
    }
}
