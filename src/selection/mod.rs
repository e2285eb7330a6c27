//! Resolving typed chart numbers into a [`Selection`].
//!
//! Input is a whitespace-separated list of numbers. Every token must be an
//! unsigned integer; numbers that are not in the catalog are ignored so a
//! user can type a loose list without aborting the whole run.

mod error;

pub use error::SelectionError;

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::catalog::{Catalog, ChartEntry};

#[allow(clippy::expect_used)]
static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("number regex is valid"));

/// Catalog entries chosen for download, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    entries: Vec<&'a ChartEntry>,
}

impl<'a> Selection<'a> {
    /// Builds a selection from entries already in catalog order.
    #[must_use]
    pub fn from_entries(entries: Vec<&'a ChartEntry>) -> Self {
        Self { entries }
    }

    /// Selects every entry of the catalog.
    #[must_use]
    pub fn all(catalog: &'a Catalog) -> Self {
        Self::from_entries(catalog.entries().iter().collect())
    }

    /// Selected entries.
    #[must_use]
    pub fn entries(&self) -> &[&'a ChartEntry] {
        &self.entries
    }

    /// Number of selected entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves raw selection input against a catalog.
///
/// # Errors
///
/// - [`SelectionError::Empty`] for empty or whitespace-only input.
/// - [`SelectionError::InvalidSyntax`] naming the first token that is not an
///   unsigned integer.
pub fn resolve_selection<'a>(
    catalog: &'a Catalog,
    input: &str,
) -> Result<Selection<'a>, SelectionError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(SelectionError::Empty);
    }

    if let Some(bad) = tokens.iter().find(|t| !NUMBER_PATTERN.is_match(t)) {
        return Err(SelectionError::InvalidSyntax {
            token: (*bad).to_string(),
        });
    }

    // Digit strings too long for usize cannot name a catalog entry.
    let requested: HashSet<usize> = tokens.iter().filter_map(|t| t.parse().ok()).collect();

    let entries: Vec<&ChartEntry> = catalog
        .entries()
        .iter()
        .filter(|e| requested.contains(&e.number))
        .collect();

    debug!(
        requested = requested.len(),
        matched = entries.len(),
        "selection resolved"
    );
    Ok(Selection::from_entries(entries))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::catalog;

    fn five() -> Catalog {
        catalog(&[
            ("Root", "AIRPORT DIAGRAM"),
            ("Root", "LAHSO"),
            ("Minimums", "TAKEOFF MINIMUMS"),
            ("Hot Spots", "ORD Hot Spot 1"),
            ("Hot Spots", "ORD Hot Spot 2"),
        ])
    }

    fn numbers(selection: &Selection<'_>) -> Vec<usize> {
        selection.entries().iter().map(|e| e.number).collect()
    }

    #[test]
    fn test_resolve_empty_input_aborts() {
        let catalog = five();
        assert_eq!(resolve_selection(&catalog, ""), Err(SelectionError::Empty));
        assert_eq!(resolve_selection(&catalog, "   "), Err(SelectionError::Empty));
        assert_eq!(resolve_selection(&catalog, "\t\n"), Err(SelectionError::Empty));
    }

    #[test]
    fn test_resolve_non_number_token_is_invalid() {
        let catalog = five();
        assert_eq!(
            resolve_selection(&catalog, "1 x"),
            Err(SelectionError::InvalidSyntax {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_rejects_signed_and_decimal_tokens() {
        let catalog = five();
        for input in ["-1", "+2", "1.5", "1,2"] {
            assert!(
                matches!(
                    resolve_selection(&catalog, input),
                    Err(SelectionError::InvalidSyntax { .. })
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolve_ignores_unknown_numbers() {
        let catalog = five();
        let selection = resolve_selection(&catalog, "1 2 99").unwrap();
        assert_eq!(numbers(&selection), vec![1, 2]);
    }

    #[test]
    fn test_resolve_returns_catalog_order() {
        let catalog = five();
        let selection = resolve_selection(&catalog, "5 3 1").unwrap();
        assert_eq!(numbers(&selection), vec![1, 3, 5]);
    }

    #[test]
    fn test_resolve_deduplicates_repeated_numbers() {
        let catalog = five();
        let selection = resolve_selection(&catalog, "4 4  4").unwrap();
        assert_eq!(numbers(&selection), vec![4]);
    }

    #[test]
    fn test_resolve_no_matches_is_empty_selection() {
        let catalog = five();
        let selection = resolve_selection(&catalog, "0 42").unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_resolve_overflowing_number_is_ignored() {
        let catalog = five();
        let selection = resolve_selection(&catalog, "2 999999999999999999999999999").unwrap();
        assert_eq!(numbers(&selection), vec![2]);
    }

    #[test]
    fn test_resolve_leading_zeros() {
        let catalog = five();
        let selection = resolve_selection(&catalog, "03").unwrap();
        assert_eq!(numbers(&selection), vec![3]);
    }

    #[test]
    fn test_selection_all() {
        let catalog = five();
        assert_eq!(Selection::all(&catalog).len(), 5);
    }
}
