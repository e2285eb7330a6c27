//! Error types for selection input.

use thiserror::Error;

/// Errors that can occur while resolving selection input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// Nothing was entered; the caller should abort without downloading.
    #[error("no charts selected")]
    Empty,

    /// A token is not an unsigned integer.
    #[error("input contains non-numbers: '{token}'\n  Suggestion: enter chart numbers separated by spaces, e.g. 1 4 7")]
    InvalidSyntax {
        /// The first offending token.
        token: String,
    },
}
