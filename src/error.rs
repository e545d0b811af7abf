//! Error types for the workspace store
//!
//! All errors use thiserror for structured error handling. Commands that
//! reference a missing identifier surface an explicit NotFound variant and
//! leave the snapshot untouched; callers may discard the error to get the
//! original "silently ignore" behavior.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Block not found in page {page_id}: {block_id}")]
    BlockNotFound { page_id: String, block_id: String },

    #[error("Notification not found: {0}")]
    NotificationNotFound(String),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("Page {0} cannot be its own ancestor")]
    ParentCycle(String),

    #[error("Page {0} must keep at least one block")]
    EmptyBlockSequence(String),

    #[error("Duplicate block id in page {page_id}: {block_id}")]
    DuplicateBlockId { page_id: String, block_id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// True for errors that only mean "the referenced thing no longer
    /// exists", which UI callers typically treat as a no-op.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::PageNotFound(_)
                | StoreError::BlockNotFound { .. }
                | StoreError::NotificationNotFound(_)
                | StoreError::EnvVarNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
