//! Streaming download of selected charts to disk.
//!
//! Charts are saved as `<root>/<airport>/<prefix> - <title>.pdf`, where the
//! prefix comes from the closed [`CATEGORY_PREFIXES`] table.
//!
//! # Features
//!
//! - Streaming downloads (memory-efficient for large chart PDFs)
//! - Fail-fast on unmapped categories, before any file is written
//! - Strictly sequential, aborting on the first failed chart
//! - Existing files are overwritten
//!
//! # Example
//!
//! ```no_run
//! use faa_charts::{AirportId, DownloadPipeline, HttpClient, Selection, fetch_catalog};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new()?;
//! let airport = AirportId::parse("KORD")?;
//! let catalog = fetch_catalog(&client, &airport).await?;
//! let saved = DownloadPipeline::new(&client, "./charts")
//!     .run(&airport, &Selection::all(&catalog))
//!     .await?;
//! println!("Saved {} charts", saved.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod filename;
mod pipeline;

pub use error::DownloadError;
pub use filename::{CATEGORY_PREFIXES, category_prefix, chart_file_name};
pub use pipeline::{DownloadPipeline, SavedChart};
