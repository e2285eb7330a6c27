//! Error types for catalog extraction.

use thiserror::Error;

/// Errors that can occur while extracting a catalog from a document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A CSS selector could not be compiled.
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// The selector text.
        selector: String,
        /// Parser message.
        reason: String,
    },
}

impl CatalogError {
    /// Creates an invalid selector error.
    #[must_use]
    pub fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.into(),
        }
    }
}
