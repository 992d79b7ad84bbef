//! Error types for domain validation.

use thiserror::Error;

/// Errors returned while validating user-supplied entity fields.
///
/// Absent-target conditions are never errors anywhere in the crate; the
/// store degrades them to identity no-ops instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The board title is empty after trimming.
    #[error("board title must not be empty")]
    EmptyBoardTitle,

    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyColumnTitle,
}
