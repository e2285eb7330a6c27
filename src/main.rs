//! CLI entry point for the FAA chart downloader.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use faa_charts::{
    AirportId, DownloadPipeline, DownloadRoot, HttpClient, SelectionError, fetch_catalog,
    render_catalog, resolve_selection,
};
use tracing::{debug, info};

mod cli;
mod terminal;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();
    terminal::init_tracing(args.default_log_level());
    debug!(?args, "CLI arguments parsed");

    // Listing needs no download root; downloading checks it before any request.
    let root = if args.list_only() {
        None
    } else {
        match DownloadRoot::from_env() {
            Ok(root) => Some(root),
            Err(error) => {
                eprintln!("{error}");
                return Ok(());
            }
        }
    };

    let raw_airport = match &args.airport {
        Some(value) => value.clone(),
        None => {
            let line = terminal::prompt_line("Enter airport identifier: ")?;
            println!();
            line
        }
    };
    let airport = match AirportId::parse(&raw_airport) {
        Ok(airport) => airport,
        Err(error) => {
            eprintln!("{error}");
            return Ok(());
        }
    };

    let client = HttpClient::new().context("failed to build HTTP client")?;
    let catalog = fetch_catalog(&client, &airport)
        .await
        .with_context(|| format!("failed to load charts for {airport}"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No charts found for {airport}");
        return Ok(());
    }

    print!("{}", render_catalog(&catalog));
    let Some(root) = root else {
        return Ok(());
    };

    let input = match &args.select {
        Some(value) => value.clone(),
        None => terminal::prompt_line("Select charts: ")?,
    };
    let selection = match resolve_selection(&catalog, &input) {
        Ok(selection) => selection,
        Err(SelectionError::Empty) => {
            println!("No charts selected");
            return Ok(());
        }
        Err(error) => {
            eprintln!("{error}");
            return Ok(());
        }
    };
    if selection.is_empty() {
        println!("None of the entered numbers match a chart");
        return Ok(());
    }

    let mut pipeline = DownloadPipeline::new(&client, root.path());
    if terminal::should_show_progress(io::stderr().is_terminal(), args.quiet) {
        pipeline = pipeline.with_progress(terminal::download_progress_bar());
    }

    let saved = pipeline
        .run(&airport, &selection)
        .await
        .with_context(|| format!("download aborted for {airport}"))?;

    for chart in &saved {
        if !args.quiet {
            println!("Saved {}", chart.path.display());
        }
    }
    info!(charts = saved.len(), "Download complete");

    Ok(())
}
