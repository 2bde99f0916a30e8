use crate::domain::TaskId;
use crate::persistence::GatewayError;
use thiserror::Error;

/// Errors surfaced by the mode and task stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// `add` was given blank text; nothing changed
    #[error("task text cannot be empty")]
    EmptyText,
    /// `delete` was given an unknown id; nothing changed
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The storage backend failed; in-memory state was left as it was
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(#[from] GatewayError),
    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the caller can simply carry on (re-prompt or ignore)
    pub fn is_benign(&self) -> bool {
        matches!(self, Self::EmptyText | Self::NotFound(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
