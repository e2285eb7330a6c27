//! Builds a [`Catalog`] from the NFDC airport display page.
//!
//! Page layout, as served:
//!
//! ```text
//! #charts
//!   .chartLink > a          ungrouped charts (category "Root")
//!   .row
//!     h3                    section heading (category)
//!     .chartLink > a        charts in that section
//! ```
//!
//! Numbering is global across the root region and every section, starting at
//! 1 and advancing only when an entry is emitted. Links without an `href`, or
//! with one that cannot be resolved, are skipped silently.

use tracing::debug;
use url::Url;

use super::document::{Document, DocumentNode};
use super::error::CatalogError;
use super::{Catalog, ChartEntry};

/// Category label for charts outside any section.
pub const ROOT_CATEGORY: &str = "Root";

/// Links directly under the chart container.
pub const ROOT_LINK_SELECTOR: &str = "#charts > .chartLink a";

/// Labeled chart sections.
pub const SECTION_SELECTOR: &str = "#charts .row";

/// Heading inside a section.
pub const SECTION_HEADING_SELECTOR: &str = "h3";

/// Links inside a section.
pub const SECTION_LINK_SELECTOR: &str = ".chartLink a";

/// Extracts the ordered chart catalog from a parsed listing page.
///
/// Relative link targets are resolved against `base`.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidSelector`] only if a selector fails to
/// compile; missing regions or sections yield an empty (or shorter) catalog.
pub fn extract_catalog<D: Document>(document: &D, base: &Url) -> Result<Catalog, CatalogError> {
    let root = document.root();
    let mut builder = CatalogBuilder::new(base);

    for link in root.select_all(ROOT_LINK_SELECTOR)? {
        builder.push(ROOT_CATEGORY, link);
    }

    for section in root.select_all(SECTION_SELECTOR)? {
        let Some(heading) = section.select_first(SECTION_HEADING_SELECTOR)? else {
            debug!("skipping chart section without heading");
            continue;
        };
        let category = normalize_text(&heading.text());

        for link in section.select_all(SECTION_LINK_SELECTOR)? {
            builder.push(&category, link);
        }
    }

    let catalog = builder.finish();
    debug!(entries = catalog.len(), "catalog extracted");
    Ok(catalog)
}

struct CatalogBuilder<'b> {
    base: &'b Url,
    entries: Vec<ChartEntry>,
}

impl<'b> CatalogBuilder<'b> {
    fn new(base: &'b Url) -> Self {
        Self {
            base,
            entries: Vec::new(),
        }
    }

    fn push<'a, N: DocumentNode<'a>>(&mut self, category: &str, link: N) {
        let title = normalize_text(&link.text());
        let Some(href) = link.attr("href") else {
            debug!(%title, "skipping chart link without href");
            return;
        };
        let locator = match self.base.join(href.trim()) {
            Ok(url) => url.to_string(),
            Err(error) => {
                debug!(%title, href, %error, "skipping chart link with unresolvable href");
                return;
            }
        };

        self.entries.push(ChartEntry {
            number: self.entries.len() + 1,
            category: category.to_string(),
            title,
            locator,
        });
    }

    fn finish(self) -> Catalog {
        Catalog::from_entries(self.entries)
    }
}

/// Trims surrounding whitespace and collapses inner whitespace runs.
fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
