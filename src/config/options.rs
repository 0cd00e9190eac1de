// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::data::FuelKind;

/// How the HTTP client presents itself.
/// Resolved once at startup; the rest of the run only sees a `Fetch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FetchStrategy {
    /// Browser-like headers, follows a few redirects.
    #[default]
    Browser,
    /// User-Agent only.
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub out_path: PathBuf,
    pub petrol_url: String,
    pub diesel_url: String,
    pub timeout: Duration,
    pub strategy: FetchStrategy,
    /// Fewer entries than this for either fuel only warns.
    pub min_entries: usize,
    pub dry_run: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
            petrol_url: PETROL_URL.to_string(),
            diesel_url: DIESEL_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            strategy: FetchStrategy::default(),
            min_entries: MIN_EXPECTED_ENTRIES,
            dry_run: false,
        }
    }
}

impl RunOptions {
    pub fn url_for(&self, kind: FuelKind) -> &str {
        match kind {
            FuelKind::Petrol => &self.petrol_url,
            FuelKind::Diesel => &self.diesel_url,
        }
    }
}
