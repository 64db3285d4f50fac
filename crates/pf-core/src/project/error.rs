use thiserror::Error;

/// Why the project list could not be loaded.
///
/// All kinds collapse into a single user-facing failed state; the kind is
/// kept so logs and tests can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectLoadError {
    /// Network unreachable, connection reset, TLS failure and the like.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("GitHub API responded {status}")]
    HttpStatus { status: u16 },

    /// The body was not a list of repositories.
    #[error("malformed response body: {0}")]
    Parse(String),
}

impl ProjectLoadError {
    /// Text shown to the user in place of the project list. Never empty.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(message) if message.trim().is_empty() => {
                "Network request failed".to_string()
            }
            Self::Transport(message) => message.clone(),
            Self::HttpStatus { status } => format!("GitHub API responded {status}"),
            Self::Parse(detail) => format!("Could not read project list: {detail}"),
        }
    }
}
