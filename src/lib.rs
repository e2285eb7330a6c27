//! FAA Charts Core Library
//!
//! This library looks up the published charts for an airport on the FAA NFDC
//! airport display service and downloads a selected subset as PDF files.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`airport`] - Airport identifier validation
//! - [`config`] - Download root configuration from the environment
//! - [`client`] - Shared HTTP client
//! - [`fetch`] - Listing fetch and response decoding
//! - [`catalog`] - Chart catalog model, extraction, and rendering
//! - [`selection`] - Resolving typed entry numbers into a selection
//! - [`download`] - Sequential streaming download pipeline

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod airport;
pub mod catalog;
pub mod client;
pub mod config;
pub mod download;
pub mod fetch;
pub mod selection;

// Re-export commonly used types
pub use airport::{AirportId, AirportIdError};
pub use catalog::{Catalog, CatalogError, CatalogGroup, ChartEntry, extract_catalog, render_catalog};
pub use client::HttpClient;
pub use config::{ConfigError, DOWNLOAD_PATH_ENV_VAR, DownloadRoot};
pub use download::{DownloadError, DownloadPipeline, SavedChart, category_prefix};
pub use fetch::{FetchError, LISTING_URL_BASE, fetch_catalog, fetch_catalog_from, listing_url};
pub use selection::{Selection, SelectionError, resolve_selection};
