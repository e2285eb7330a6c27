//! Sequential download of a chart selection.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};

use super::error::DownloadError;
use super::filename::{RunFileNames, category_prefix, chart_file_name};
use crate::airport::AirportId;
use crate::catalog::ChartEntry;
use crate::client::HttpClient;
use crate::selection::Selection;

/// A chart written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedChart {
    /// Entry number from the catalog.
    pub number: usize,
    /// Destination file.
    pub path: PathBuf,
    /// Bytes written.
    pub bytes: u64,
}

/// Planned destination for one entry.
#[derive(Debug)]
struct PlannedChart<'a> {
    entry: &'a ChartEntry,
    path: PathBuf,
}

/// Downloads selected charts into `<root>/<airport>/`.
///
/// Entries are processed one at a time in selection order. The first failure
/// stops the run; files written before it are kept.
pub struct DownloadPipeline<'c> {
    client: &'c HttpClient,
    root: PathBuf,
    progress: Option<ProgressBar>,
}

impl<'c> DownloadPipeline<'c> {
    /// Creates a pipeline writing under `root`.
    #[must_use]
    pub fn new(client: &'c HttpClient, root: impl Into<PathBuf>) -> Self {
        Self {
            client,
            root: root.into(),
            progress: None,
        }
    }

    /// Reports per-chart progress on the given bar.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Directory charts for `airport` are written to.
    #[must_use]
    pub fn destination_dir(&self, airport: &AirportId) -> PathBuf {
        self.root.join(airport.as_str())
    }

    /// Downloads every entry of `selection`.
    ///
    /// File names are planned for the whole selection before anything touches
    /// the disk, so an unmapped category writes nothing.
    ///
    /// # Errors
    ///
    /// - [`DownloadError::UnmappedCategory`] if any entry's category has no prefix.
    /// - [`DownloadError::CreateDirectory`] if the airport directory cannot be created.
    /// - [`DownloadError::Network`], [`DownloadError::HttpStatus`], or
    ///   [`DownloadError::Io`] for the first entry that fails.
    #[instrument(skip(self, airport, selection), fields(airport = %airport, charts = selection.len()))]
    pub async fn run(
        &self,
        airport: &AirportId,
        selection: &Selection<'_>,
    ) -> Result<Vec<SavedChart>, DownloadError> {
        let dir = self.destination_dir(airport);
        let plan = plan_downloads(&dir, selection)?;

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| DownloadError::CreateDirectory {
                path: dir.clone(),
                source,
            })?;

        if let Some(bar) = &self.progress {
            bar.set_length(plan.len() as u64);
        }

        let mut saved = Vec::with_capacity(plan.len());
        for planned in plan {
            if let Some(bar) = &self.progress {
                bar.set_message(planned.entry.title.clone());
            }

            let bytes = self.download_entry(planned.entry, &planned.path).await?;
            info!(
                number = planned.entry.number,
                path = %planned.path.display(),
                bytes,
                "chart saved"
            );
            saved.push(SavedChart {
                number: planned.entry.number,
                path: planned.path,
                bytes,
            });

            if let Some(bar) = &self.progress {
                bar.inc(1);
            }
        }

        if let Some(bar) = &self.progress {
            bar.finish_and_clear();
        }
        Ok(saved)
    }

    /// Streams one chart to `path`, replacing any existing file.
    ///
    /// The body is written to a `.part` sibling first and renamed over `path`
    /// only once complete, so a failed transfer leaves an earlier copy intact.
    async fn download_entry(&self, entry: &ChartEntry, path: &Path) -> Result<u64, DownloadError> {
        debug!(number = entry.number, url = %entry.locator, "downloading chart");

        let network = |source| DownloadError::Network {
            number: entry.number,
            title: entry.title.clone(),
            url: entry.locator.clone(),
            source,
        };
        let io = |source| DownloadError::Io {
            number: entry.number,
            title: entry.title.clone(),
            path: path.to_path_buf(),
            source,
        };

        let response = self
            .client
            .get(&entry.locator)
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus {
                number: entry.number,
                title: entry.title.clone(),
                url: entry.locator.clone(),
                status: status.as_u16(),
            });
        }

        let partial = partial_path(path);
        let result = match stream_to_file(response, &partial).await {
            Ok(bytes) => tokio::fs::rename(&partial, path)
                .await
                .map(|()| bytes)
                .map_err(StreamError::Io),
            Err(e) => Err(e),
        };

        match result {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                debug!(path = %partial.display(), "cleaning up partial file after error");
                let _ = tokio::fs::remove_file(&partial).await;
                Err(match e {
                    StreamError::Network(source) => network(source),
                    StreamError::Io(source) => io(source),
                })
            }
        }
    }
}

/// Failure while writing a response body to disk.
enum StreamError {
    Network(reqwest::Error),
    Io(std::io::Error),
}

/// Sibling path a chart is streamed into before it replaces `path`.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

async fn stream_to_file(response: reqwest::Response, path: &Path) -> Result<u64, StreamError> {
    let file = File::create(path).await.map_err(StreamError::Io)?;
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(StreamError::Network)?;
        writer.write_all(&chunk).await.map_err(StreamError::Io)?;
        bytes_written += chunk.len() as u64;
    }

    writer.flush().await.map_err(StreamError::Io)?;
    Ok(bytes_written)
}

/// Resolves the destination path of every entry, failing on the first
/// unmapped category.
fn plan_downloads<'a>(
    dir: &Path,
    selection: &Selection<'a>,
) -> Result<Vec<PlannedChart<'a>>, DownloadError> {
    let mut names = RunFileNames::default();
    selection
        .entries()
        .iter()
        .map(|&entry| -> Result<PlannedChart<'a>, DownloadError> {
            let prefix = category_prefix(&entry.category)
                .ok_or_else(|| DownloadError::unmapped_category(&entry.category))?;
            let name = names.claim(chart_file_name(prefix, &entry.title));
            Ok(PlannedChart {
                entry,
                path: dir.join(name),
            })
        })
        .collect()
}
