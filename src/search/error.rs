//! Errors reported by the search strategies

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A configuration value is outside its valid range. Reported before any
    /// state is expanded.
    #[error("invalid search configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    /// A worker caught a panic while expanding a state. The node it was
    /// working on could not be explored, so the result would be incomplete.
    #[error("worker {worker_id} panicked while expanding a state: {message}")]
    ExpansionPanicked { worker_id: usize, message: String },

    /// A worker thread terminated without reporting back.
    #[error("worker {worker_id} exited unexpectedly")]
    WorkerLost { worker_id: usize },

    /// The OS refused to start a worker thread.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

impl SearchError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        SearchError::InvalidConfig { field, reason }
    }
}
