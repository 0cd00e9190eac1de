// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use crate::config::consts::{
    DEFAULT_OUT_FILE, DIESEL_URL, MIN_EXPECTED_ENTRIES, PETROL_URL, REQUEST_TIMEOUT_SECS,
};
use crate::config::options::{FetchStrategy, RunOptions};
use crate::core::net::HttpFetcher;
use crate::data::FuelKind;
use crate::error::RunError;
use crate::{file, scrape};

#[derive(Parser, Debug)]
#[command(name = "openfuel", version, about = "Scrape petrol and diesel prices into a JSON snapshot")]
pub struct Args {
    /// Output JSON file; replaced only after a fully successful scrape.
    #[arg(short, long, env = "OPENFUEL_OUT", default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    #[arg(long, env = "OPENFUEL_PETROL_URL", default_value = PETROL_URL)]
    pub petrol_url: String,

    #[arg(long, env = "OPENFUEL_DIESEL_URL", default_value = DIESEL_URL)]
    pub diesel_url: String,

    /// Per-request timeout.
    #[arg(long, env = "OPENFUEL_TIMEOUT_SECS", default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Use a bare HTTP client instead of browser-like headers.
    #[arg(long)]
    pub plain: bool,

    /// Warn when a fuel list has fewer entries than this.
    #[arg(long, default_value_t = MIN_EXPECTED_ENTRIES)]
    pub min_entries: usize,

    /// Print the snapshot to stdout instead of writing the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Debug-level logging (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,

    /// Also append logs to this file.
    #[arg(long, env = "OPENFUEL_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> RunOptions {
        RunOptions {
            out_path: self.out.clone(),
            petrol_url: self.petrol_url.clone(),
            diesel_url: self.diesel_url.clone(),
            timeout: std::time::Duration::from_secs(self.timeout_secs),
            strategy: if self.plain { FetchStrategy::Plain } else { FetchStrategy::Browser },
            min_entries: self.min_entries,
            dry_run: self.dry_run,
        }
    }
}

/// Parse args, set up logging, run. Errors bubble up to the binary.
pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose, args.log_file.as_deref())?;
    let opts = args.options();

    match run_with(&opts) {
        Ok(()) => {
            info!("Pipeline completed successfully!");
            Ok(())
        }
        Err(e) => {
            error!("Critical error: {e}");
            if !opts.dry_run {
                error!(
                    "Previous {} (if it exists) will remain unchanged.",
                    opts.out_path.display()
                );
            }
            Err(e.into())
        }
    }
}

fn run_with(opts: &RunOptions) -> Result<(), RunError> {
    // Strategy is fixed here; everything downstream only sees `dyn Fetch`.
    let fetcher = HttpFetcher::new(opts.strategy, opts.timeout).map_err(RunError::Client)?;
    info!(strategy = ?fetcher.strategy(), timeout_secs = opts.timeout.as_secs(), "HTTP client ready");

    let snapshot = scrape::collect(&fetcher, opts)?;

    if opts.dry_run {
        println!("{}", file::to_json(&snapshot)?);
        return Ok(());
    }

    file::write_snapshot(&opts.out_path, &snapshot)?;

    for kind in FuelKind::ALL {
        if let Some(first) = snapshot.records(kind).first() {
            info!("First {kind} entry: {} = {}", first.location, first.price);
        }
    }
    Ok(())
}
