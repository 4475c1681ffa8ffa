use std::time::Duration;

use thiserror::Error;

/// Unified error type for the jarvis crate.
#[derive(Debug, Clone, Error)]
pub enum JarvisError {
    /// The host does not provide this operation.
    #[error("not implemented")]
    NotImplemented,
    /// Invalid input provided by the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The operation exists but cannot run on this host or version.
    #[error("unsupported: {0}")]
    Unsupported(String),
    /// The remote service could not be reached.
    #[error("transport error: {0}")]
    Transport(String),
    /// The remote service did not answer in time.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// Settings or resources could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),
    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for JarvisError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            JarvisError::Transport(format!("timed out: {error}"))
        } else {
            JarvisError::Transport(error.to_string())
        }
    }
}

/// Result type alias using [`JarvisError`].
pub type JarvisResult<T> = Result<T, JarvisError>;
