//! Airport identifier validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Four alphanumeric characters, matched case-insensitively.
#[allow(clippy::expect_used)]
static AIRPORT_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]{4}$").expect("airport identifier regex is valid")
});

/// Errors produced while validating an airport identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AirportIdError {
    /// The input is not a 4-character alphanumeric identifier.
    #[error("Airport identifier invalid: '{input}'\n  Suggestion: use a 4-character identifier such as KORD")]
    Invalid {
        /// The rejected input, trimmed.
        input: String,
    },
}

/// A validated airport identifier (e.g. `KORD`), normalized to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AirportId(String);

impl AirportId {
    /// Validates and normalizes raw user input.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AirportIdError::Invalid`] when the trimmed input is not
    /// exactly four ASCII letters or digits.
    pub fn parse(input: &str) -> Result<Self, AirportIdError> {
        let trimmed = input.trim();
        if !AIRPORT_ID_PATTERN.is_match(trimmed) {
            return Err(AirportIdError::Invalid {
                input: trimmed.to_string(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the normalized identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
