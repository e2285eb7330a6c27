//! Chart catalog model, extraction, and rendering.
//!
//! A [`Catalog`] is built once per airport lookup by [`extract_catalog`] and
//! only read afterwards.
//!
//! # Example
//!
//! ```
//! use faa_charts::catalog::{extract_catalog, render_catalog};
//! use scraper::Html;
//! use url::Url;
//!
//! let html = Html::parse_document(
//!     r#"<div id="charts">
//!          <div class="chartLink"><a href="/d/apd.pdf">AIRPORT DIAGRAM</a></div>
//!          <div class="row"><h3>Hot Spots</h3>
//!            <div class="chartLink"><a href="/d/hs1.pdf">ORD Hot Spot 1</a></div>
//!          </div>
//!        </div>"#,
//! );
//! let base = Url::parse("https://nfdc.faa.gov/listing").unwrap();
//! let catalog = extract_catalog(&html, &base).unwrap();
//! assert_eq!(catalog.len(), 2);
//! assert!(render_catalog(&catalog).contains("2. ORD Hot Spot 1"));
//! ```

pub mod document;
mod error;
mod extractor;
mod presenter;

pub use document::{Document, DocumentNode};
pub use error::CatalogError;
pub use extractor::{
    ROOT_CATEGORY, ROOT_LINK_SELECTOR, SECTION_HEADING_SELECTOR, SECTION_LINK_SELECTOR,
    SECTION_SELECTOR, extract_catalog,
};
pub use presenter::render_catalog;

use serde::Serialize;

/// One downloadable chart found on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    /// Selection key, 1-based in document order.
    pub number: usize,
    /// Section label (`Root` for the ungrouped region).
    pub category: String,
    /// Link text.
    pub title: String,
    /// Absolute URL of the chart.
    pub locator: String,
}

/// Entries of one category, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogGroup<'a> {
    /// Category label shared by all entries.
    pub category: &'a str,
    /// Entries in encounter order.
    pub entries: Vec<&'a ChartEntry>,
}

impl CatalogGroup<'_> {
    /// Largest entry number in this group (0 for an empty group).
    #[must_use]
    pub fn max_number(&self) -> usize {
        self.entries.iter().map(|e| e.number).max().unwrap_or(0)
    }
}

/// Ordered chart entries for one airport lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<ChartEntry>,
}

impl Catalog {
    /// Wraps entries that are already numbered 1..N.
    pub(crate) fn from_entries(entries: Vec<ChartEntry>) -> Self {
        Self { entries }
    }

    /// All entries in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[ChartEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no charts were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by its selection number.
    #[must_use]
    pub fn get(&self, number: usize) -> Option<&ChartEntry> {
        self.entries.iter().find(|e| e.number == number)
    }

    /// Groups entries by category, in first-seen category order.
    #[must_use]
    pub fn groups(&self) -> Vec<CatalogGroup<'_>> {
        let mut groups: Vec<CatalogGroup<'_>> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|g| g.category == entry.category) {
                Some(group) => group.entries.push(entry),
                None => groups.push(CatalogGroup {
                    category: &entry.category,
                    entries: vec![entry],
                }),
            }
        }
        groups
    }
}
