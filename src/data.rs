// src/data.rs
//
// Plain data carried from extraction to the output file.
//
// - PriceRecord: one location's price, produced by `specs::fuel::extract`.
// - FuelSnapshot: both fuel lists plus the run timestamp; this is exactly
//                 what lands in `prices.json`.

use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::config::consts::IST_OFFSET_SECS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FuelKind {
    Petrol,
    Diesel,
}

impl FuelKind {
    pub const ALL: [FuelKind; 2] = [FuelKind::Petrol, FuelKind::Diesel];

    pub fn label(self) -> &'static str {
        match self {
            FuelKind::Petrol => "petrol",
            FuelKind::Diesel => "diesel",
        }
    }
}

impl fmt::Display for FuelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single location's price. The location is a city or a state name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "city")]
    pub location: String,
    pub price: f64,
}

impl PriceRecord {
    pub fn new(location: impl Into<String>, price: f64) -> Self {
        Self { location: location.into(), price }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelSnapshot {
    #[serde(rename = "last_updated_ist")]
    pub generated_at: DateTime<FixedOffset>,
    pub petrol: Vec<PriceRecord>,
    pub diesel: Vec<PriceRecord>,
}

impl FuelSnapshot {
    pub fn at(
        generated_at: DateTime<FixedOffset>,
        petrol: Vec<PriceRecord>,
        diesel: Vec<PriceRecord>,
    ) -> Self {
        Self { generated_at, petrol, diesel }
    }

    /// Stamp with the current time in IST.
    pub fn now(petrol: Vec<PriceRecord>, diesel: Vec<PriceRecord>) -> Self {
        Self::at(ist_now(), petrol, diesel)
    }

    pub fn records(&self, kind: FuelKind) -> &[PriceRecord] {
        match kind {
            FuelKind::Petrol => &self.petrol,
            FuelKind::Diesel => &self.diesel,
        }
    }
}

pub fn ist_offset() -> FixedOffset {
    // +05:30 is always in range
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

pub fn ist_now() -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&ist_offset())
}
