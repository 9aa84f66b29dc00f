//! Error types for statement building.

use thiserror::Error;

/// Errors raised while assembling a statement.
///
/// Both variants describe a mistake in how the statement was put together,
/// so they are reported to the caller as soon as they are detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// `build()` was called before a non-empty table name was set.
    #[error("table() must be set before build()")]
    MissingTable,

    /// A WHERE predicate was given a different number of values than it
    /// has `?` markers.
    #[error(
        "where clause `{clause}` has {placeholders} placeholder(s) but {values} value(s) were supplied"
    )]
    PlaceholderMismatch {
        /// The rejected predicate text.
        clause: String,
        /// Number of `?` markers found in the predicate.
        placeholders: usize,
        /// Number of values supplied with it.
        values: usize,
    },
}

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, BuilderError>;
