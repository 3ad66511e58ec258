//! Rental receipts: the structured record handed to a renderer after a booking.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::fleet::{Vehicle, VehicleClass};
use crate::ledger::TripRecord;
use crate::zone::Zone;

/// Timestamp layout used in receipt file names. Avoids characters that are illegal in
/// file names on common platforms.
const FILE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub account: String,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub class: VehicleClass,
    pub origin: Zone,
    pub destination: Zone,
    pub distance: u32,
    pub cost: u32,
    pub timestamp: DateTime<Utc>,
}

impl Receipt {
    pub fn new(record: &TripRecord, vehicle: &Vehicle) -> Self {
        Self {
            account: record.account.clone(),
            plate: record.plate.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            class: record.class,
            origin: record.origin,
            destination: record.destination,
            distance: record.distance,
            cost: record.cost,
            timestamp: record.completed_at,
        }
    }

    /// `{account}_rental_receipt_{timestamp}.{extension}`, with the account name
    /// reduced to characters that are safe in a single path component.
    pub fn file_name(&self, extension: &str) -> String {
        format!(
            "{}_rental_receipt_{}.{}",
            path_safe(&self.account),
            self.timestamp.format(FILE_TIMESTAMP_FORMAT),
            extension
        )
    }
}

fn path_safe(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Turns a [`Receipt`] into a document.
pub trait ReceiptRenderer {
    /// File extension without the leading dot.
    fn extension(&self) -> &'static str;

    fn render(&self, receipt: &Receipt, out: &mut dyn Write) -> Result<()>;
}

/// Plain-text receipt, one labelled line per field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReceiptRenderer;

impl ReceiptRenderer for TextReceiptRenderer {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, receipt: &Receipt, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Rental Receipt for {}", receipt.account)?;
        writeln!(out)?;
        writeln!(out, "Date: {}", receipt.timestamp.format(DISPLAY_TIMESTAMP_FORMAT))?;
        writeln!(out, "Car: {} {} ({})", receipt.brand, receipt.model, receipt.plate)?;
        writeln!(out, "Car Type: {}", receipt.class)?;
        writeln!(out, "Start Zone: {}", receipt.origin)?;
        writeln!(out, "End Zone: {}", receipt.destination)?;
        writeln!(out, "Distance Travelled: {}", receipt.distance)?;
        writeln!(out, "Total Cost: {}", receipt.cost)?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReceiptRenderer;

impl ReceiptRenderer for JsonReceiptRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, receipt: &Receipt, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, receipt)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Render `receipt` into `dir` under its conventional file name and return the path.
pub fn write_receipt<P: AsRef<Path>>(
    dir: P,
    receipt: &Receipt,
    renderer: &dyn ReceiptRenderer,
) -> Result<PathBuf> {
    let path = dir.as_ref().join(receipt.file_name(renderer.extension()));
    let mut writer = BufWriter::new(File::create(&path)?);
    renderer.render(receipt, &mut writer)?;
    writer.flush()?;
    info!(path = %path.display(), "rental receipt written");
    Ok(path)
}
