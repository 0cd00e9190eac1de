// src/specs/fuel.rs
//! Scraping *spec* for the goodreturns.in fuel price pages.
//!
//! Page shape (petrol and diesel pages are identical):
//! ```text
//! div.gd-fuel-table-block            one per table (metro cities, states, ...)
//!   table.gd-fuel-table-list
//!     tr > th, th                    heading row, ignored
//!     tr > td(location), td(price), ...
//! ```
//!
//! The same location can appear in more than one block (Chandigarh is both a
//! city and a union territory). The first occurrence wins.

use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::config::consts::{FUEL_TABLE_BLOCK, FUEL_TABLE_LIST};
use crate::core::html::{contains, text_of};
use crate::core::sanitize::normalize_price;
use crate::data::PriceRecord;
use crate::error::ExtractionError;

struct Selectors {
    block: Selector,
    table: Selector,
    row: Selector,
    header: Selector,
    cell: Selector,
}

/// Parse one of the selectors below. They are all built from constants,
/// so a failure here is a typo in this file, caught by any extract test.
fn built_in(css: &str) -> Selector {
    Selector::parse(css).expect("built-in selector is valid CSS")
}

static SEL: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    block: built_in(&format!("div.{FUEL_TABLE_BLOCK}")),
    table: built_in(&format!("table.{FUEL_TABLE_LIST}")),
    row: built_in("tr"),
    header: built_in("th"),
    cell: built_in("td"),
});

/// Extract `(location, price)` records from one fuel page.
///
/// Never returns an empty `Vec`: a page without usable rows is an
/// `ExtractionError`, which says whether the table containers were missing
/// altogether or present but unreadable.
pub fn extract(markup: &str, fuel: &str) -> Result<Vec<PriceRecord>, ExtractionError> {
    let doc = Html::parse_document(markup);
    let sel = &*SEL;

    let mut records: Vec<PriceRecord> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut blocks = 0usize;
    let mut tables = 0usize;

    for block in doc.select(&sel.block) {
        blocks += 1;

        let Some(table) = block.select(&sel.table).next() else {
            debug!(fuel, block = blocks, "Fuel block without a price table");
            continue;
        };
        tables += 1;

        for row in table.select(&sel.row) {
            if contains(row, &sel.header) {
                continue;
            }
            let Some((location, raw_price)) = row_pair(row, &sel.cell) else {
                continue;
            };

            let Some(price) = normalize_price(&raw_price) else {
                warn!(fuel, location = %location, raw = %raw_price, "Could not parse price");
                continue;
            };
            if price <= 0.0 {
                warn!(fuel, location = %location, price, "Ignoring non-positive price");
                continue;
            }

            if location.is_empty() || seen.contains(&location) {
                continue;
            }
            seen.insert(location.clone());
            records.push(PriceRecord { location, price });
        }
    }

    if records.is_empty() {
        let fuel = fuel.to_string();
        return Err(if blocks == 0 {
            ExtractionError::NoTableBlocks { fuel }
        } else {
            ExtractionError::NoRecords { fuel, blocks, tables }
        });
    }

    info!(fuel, count = records.len(), blocks, tables, "Extracted fuel prices");
    Ok(records)
}

/// First two data cells of a row as (location, raw price text).
fn row_pair(row: ElementRef<'_>, cell: &Selector) -> Option<(String, String)> {
    let mut cells = row.select(cell);
    let name = cells.next()?;
    let price = cells.next()?;
    Some((text_of(name), text_of(price)))
}
