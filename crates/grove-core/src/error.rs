//! Error types for tree operations.
//!
//! Most of the cursor API does not return errors at all: recoverable absence
//! is an `Option`/`bool`, invalidation is an inspectable cursor state, and
//! programmer errors are debug assertions. `TreeError` covers the remaining
//! fallible surface — handle-level access and the JSON bridge.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// The handle's node was deleted (or its slot reused) since the handle
    /// was captured.
    #[error("stale node handle: the referenced node no longer exists")]
    StaleHandle,

    /// The root node of a tree must stay an `Object` or an `Array`.
    #[error("tree root must be an object or an array")]
    RootMustBeContainer,

    /// An integer that does not fit the 32-bit payload (JSON loading path).
    #[error("integer {0} does not fit the 32-bit int payload")]
    IntOutOfRange(i64),

    /// The input string was not valid JSON (JSON loading path).
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Convenience alias used throughout grove-core.
pub type Result<T> = std::result::Result<T, TreeError>;
