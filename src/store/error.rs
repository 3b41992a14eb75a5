//! Task store error types.

use crate::remote::RemoteError;

/// Errors raised by task store operations.
///
/// Every variant is recoverable: the authoritative list is never left in a
/// partially replaced state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Local precondition failed before any request was made
    #[error("{0}")]
    Validation(String),

    /// Loading tasks or stats from the service failed
    #[error("Failed to load {what}: {source}")]
    RemoteFetch {
        what: &'static str,
        #[source]
        source: RemoteError,
    },

    /// Creating, updating or deleting a task failed
    #[error("Failed to {action} task: {source}")]
    RemoteMutation {
        action: &'static str,
        #[source]
        source: RemoteError,
    },
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}
