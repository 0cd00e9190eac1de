// src/scrape.rs
// Run orchestration: fetch both pages, extract, stamp the snapshot.
// Writing the file is left to the caller so a failed run never touches it.

use tracing::{error, info, warn};

use crate::{
    config::options::RunOptions,
    core::net::Fetch,
    data::{FuelKind, FuelSnapshot, PriceRecord},
    error::RunError,
    specs::fuel,
};

/// Fetch and extract one fuel page.
pub fn collect_fuel(
    fetcher: &dyn Fetch,
    kind: FuelKind,
    opts: &RunOptions,
) -> Result<Vec<PriceRecord>, RunError> {
    info!(fuel = %kind, "Fetching {kind} prices...");

    let markup = fetcher.fetch(opts.url_for(kind)).map_err(|source| {
        error!(fuel = %kind, "Failed to fetch {kind} data");
        RunError::Fetch { fuel: kind, source }
    })?;

    let records = fuel::extract(&markup, kind.label()).map_err(|e| {
        error!(fuel = %kind, "Failed to parse {kind} data: {e}");
        e
    })?;

    info!(fuel = %kind, "Successfully extracted {} {kind} prices", records.len());
    if records.len() < opts.min_entries {
        warn!(
            fuel = %kind,
            "Only got {} {kind} prices, expected at least {}",
            records.len(),
            opts.min_entries
        );
    }
    Ok(records)
}

/// Build a full snapshot. Petrol first, then diesel; the first failure aborts.
pub fn collect(fetcher: &dyn Fetch, opts: &RunOptions) -> Result<FuelSnapshot, RunError> {
    info!("Starting fuel price scrape");

    let petrol = collect_fuel(fetcher, FuelKind::Petrol, opts)?;
    let diesel = collect_fuel(fetcher, FuelKind::Diesel, opts)?;

    let snapshot = FuelSnapshot::now(petrol, diesel);

    info!(
        timestamp = %snapshot.generated_at.to_rfc3339(),
        petrol = snapshot.petrol.len(),
        diesel = snapshot.diesel.len(),
        "Scraping completed successfully"
    );
    Ok(snapshot)
}
