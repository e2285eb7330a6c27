//! Error types for the download pipeline.
//!
//! Every per-entry variant carries the entry number and title so the user can
//! tell which chart stopped the run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while downloading a selection.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// A selected entry's category has no file prefix. Raised before any
    /// file is written.
    #[error("Chart category '{category}' not mapped to file prefix")]
    UnmappedCategory {
        /// The unmapped category label.
        category: String,
    },

    /// The airport directory could not be created.
    #[error("IO error creating directory {path}: {source}")]
    CreateDirectory {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Network-level error while requesting or streaming a chart.
    #[error("network error downloading chart {number} ({title}) from {url}: {source}")]
    Network {
        /// Entry number.
        number: usize,
        /// Entry title.
        title: String,
        /// Chart URL.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// The chart server returned a non-success status.
    #[error("HTTP {status} downloading chart {number} ({title}) from {url}")]
    HttpStatus {
        /// Entry number.
        number: usize,
        /// Entry title.
        title: String,
        /// Chart URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Writing the chart file failed.
    #[error("IO error writing chart {number} ({title}) to {path}: {source}")]
    Io {
        /// Entry number.
        number: usize,
        /// Entry title.
        title: String,
        /// Destination file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// Creates an unmapped category error.
    pub fn unmapped_category(category: impl Into<String>) -> Self {
        Self::UnmappedCategory {
            category: category.into(),
        }
    }

    /// Entry number the error belongs to, if it is tied to one entry.
    #[must_use]
    pub fn entry_number(&self) -> Option<usize> {
        match self {
            Self::Network { number, .. }
            | Self::HttpStatus { number, .. }
            | Self::Io { number, .. } => Some(*number),
            Self::UnmappedCategory { .. } | Self::CreateDirectory { .. } => None,
        }
    }
}
