//! Ledger export to CSV and JSON.

use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::ledger::TripLedger;

/// One CSV row per trip, with a header row.
pub fn write_ledger_csv<P: AsRef<Path>>(path: P, ledger: &TripLedger) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in ledger.records() {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON array of trips.
pub fn write_ledger_json<P: AsRef<Path>>(path: P, ledger: &TripLedger) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, ledger.records())?;
    Ok(())
}
