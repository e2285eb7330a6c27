//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Look up and download FAA airport charts.
///
/// Lists the charts NFDC publishes for an airport, grouped by category, and
/// saves the ones you pick under $FAA_CHARTS_DOWNLOAD_PATH/<AIRPORT>/.
#[derive(Parser, Debug)]
#[command(name = "faa-charts")]
#[command(author, version, about)]
pub struct Args {
    /// Airport identifier, e.g. KORD (prompted for when omitted)
    pub airport: Option<String>,

    /// Chart numbers to download, space separated (prompted for when omitted)
    #[arg(short, long, value_name = "NUMBERS")]
    pub select: Option<String>,

    /// Print the chart list and exit without downloading
    #[arg(short, long, conflicts_with = "select")]
    pub list: bool,

    /// Print the chart list as JSON and exit without downloading
    #[arg(long, conflicts_with_all = ["select", "list"])]
    pub json: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Returns true when the run only lists charts.
    pub fn list_only(&self) -> bool {
        self.list || self.json
    }

    /// Default tracing level from the verbosity flags.
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
