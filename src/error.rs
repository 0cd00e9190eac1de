// src/error.rs
//! Typed errors for the library. The binary wraps these in `color_eyre`.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::FuelKind;

/// A whole page produced no usable price rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// Not a single `gd-fuel-table-block` container in the markup.
    #[error("No fuel table blocks found in {fuel} data.")]
    NoTableBlocks { fuel: String },

    /// Containers were present, but no row survived parsing.
    #[error("Failed to extract any fuel data from {fuel} page.")]
    NoRecords { fuel: String, blocks: usize, tables: usize },
}

impl ExtractionError {
    pub fn fuel(&self) -> &str {
        match self {
            ExtractionError::NoTableBlocks { fuel } => fuel,
            ExtractionError::NoRecords { fuel, .. } => fuel,
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The site answered with an anti-bot interstitial instead of the page.
    #[error("received a Cloudflare challenge page from {url}")]
    Challenge { url: String },
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anything that aborts a run. None of these leave a partial snapshot behind.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not set up HTTP client")]
    Client(#[source] FetchError),

    #[error("could not fetch {fuel} data from source")]
    Fetch {
        fuel: FuelKind,
        #[source]
        source: FetchError,
    },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
