//! Error types for the listing fetch.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors that can occur while fetching and decoding the chart listing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure (DNS, connection, TLS, interrupted body).
    #[error("network error fetching {url}: {source}")]
    Transport {
        /// The listing URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The listing URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The body could not be decompressed.
    #[error("failed to decode listing from {url}: {source}")]
    Decode {
        /// The listing URL.
        url: String,
        /// The underlying decompression error.
        #[source]
        source: std::io::Error,
    },

    /// The listing URL could not be built or parsed.
    #[error("invalid listing URL: {url}")]
    InvalidUrl {
        /// The rejected URL.
        url: String,
    },

    /// Catalog extraction failed.
    #[error("failed to extract catalog from {url}: {source}")]
    Catalog {
        /// The listing URL.
        url: String,
        /// The extraction error.
        #[source]
        source: CatalogError,
    },
}

impl FetchError {
    /// Creates a transport error.
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a decode error.
    pub fn decode(url: impl Into<String>, source: std::io::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Returns true for failures of the transport layer (network or status).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::HttpStatus { .. })
    }
}
