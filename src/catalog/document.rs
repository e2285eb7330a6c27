//! Document tree abstraction used by the catalog extractor.
//!
//! The extractor only needs CSS-selector queries, element text, and attribute
//! lookups, so it is written against these traits. [`scraper::Html`] provides
//! the production implementation.

use scraper::{ElementRef, Html, Selector};

use super::error::CatalogError;

/// An element in a parsed document.
pub trait DocumentNode<'a>: Copy {
    /// Returns all descendants matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSelector`] if `selector` is not valid CSS.
    fn select_all(self, selector: &str) -> Result<Vec<Self>, CatalogError>;

    /// Returns the first descendant matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSelector`] if `selector` is not valid CSS.
    fn select_first(self, selector: &str) -> Result<Option<Self>, CatalogError> {
        Ok(self.select_all(selector)?.into_iter().next())
    }

    /// Concatenated text of this element and its descendants.
    fn text(self) -> String;

    /// Value of the named attribute, if present.
    fn attr(self, name: &str) -> Option<&'a str>;
}

/// A parsed document with a queryable root element.
pub trait Document {
    /// Element handle type borrowed from the document.
    type Node<'a>: DocumentNode<'a>
    where
        Self: 'a;

    /// The document's root element.
    fn root(&self) -> Self::Node<'_>;
}

fn compile(selector: &str) -> Result<Selector, CatalogError> {
    Selector::parse(selector).map_err(|e| CatalogError::invalid_selector(selector, e.to_string()))
}

impl<'a> DocumentNode<'a> for ElementRef<'a> {
    fn select_all(self, selector: &str) -> Result<Vec<Self>, CatalogError> {
        let compiled = compile(selector)?;
        Ok(self.select(&compiled).collect())
    }

    fn text(self) -> String {
        ElementRef::text(&self).collect()
    }

    fn attr(self, name: &str) -> Option<&'a str> {
        self.value().attr(name)
    }
}

impl Document for Html {
    type Node<'a> = ElementRef<'a>;

    fn root(&self) -> ElementRef<'_> {
        self.root_element()
    }
}
