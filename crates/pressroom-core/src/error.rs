//! Error types for the core crate.

use thiserror::Error;

/// Draft store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("draft store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored draft data could not be (de)serialized.
    #[error("draft store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No draft with the given id.
    #[error("draft not found: {id}")]
    NotFound { id: String },
}

/// Draft-to-file mapping errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// Two drafts in one batch map to the same destination path.
    #[error("duplicate destination path: {path}")]
    DuplicatePath { path: String },
}
