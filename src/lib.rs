// src/lib.rs

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod scrape;

pub use crate::core::sanitize::normalize_price;
pub use crate::data::{FuelKind, FuelSnapshot, PriceRecord};
pub use crate::error::{ExtractionError, FetchError, RunError, SnapshotError};
pub use crate::specs::fuel::extract;
