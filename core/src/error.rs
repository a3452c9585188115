//! Common error types for mixed lists.

use crate::Value;
use thiserror::Error;

/// Errors that can occur during list operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    /// Index outside the range accepted by the operation.
    #[error(
        "IndexOutOfBounds: the given index exceeds the boundaries of the list (index {index}, length {len})"
    )]
    IndexOutOfBounds { index: isize, len: usize },

    /// No element matched the searched value.
    #[error("ValueError: '{0}' is not in the list")]
    NotFound(Value),
}

impl ListError {
    /// Returns true if this is a bounds violation.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, ListError::IndexOutOfBounds { .. })
    }

    /// Returns true if this is a failed lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ListError::NotFound(_))
    }
}

/// Result type for list operations.
pub type ListResult<T> = Result<T, ListError>;
