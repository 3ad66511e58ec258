//! Scripted sessions: a JSON list of operations run in order against one service.

use std::fs;
use std::path::{Path, PathBuf};

use rental_core::accounts::{Account, AccountUpdate};
use rental_core::dispatch::Selection;
use rental_core::fleet::{Vehicle, VehicleClass, VehicleUpdate};
use rental_core::receipt::{write_receipt, ReceiptRenderer};
use rental_core::request::TripRequest;
use rental_core::zone::Zone;
use rental_core::{RentalError, RentalService};
use serde::Deserialize;
use tracing::warn;

use crate::output;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptCommand {
    AddVehicle {
        vehicle: Vehicle,
    },
    UpdateVehicle {
        plate: String,
        #[serde(default)]
        update: VehicleUpdate,
    },
    RemoveVehicle {
        plate: String,
    },
    RegisterAccount {
        account: Account,
    },
    UpdateAccount {
        name: String,
        #[serde(default)]
        update: AccountUpdate,
    },
    RemoveAccount {
        name: String,
    },
    Quote {
        class: VehicleClass,
        passengers: u32,
        origin: Zone,
    },
    Rent {
        account: String,
        class: VehicleClass,
        passengers: u32,
        origin: Zone,
        destination: Zone,
    },
    Status {
        plate: String,
    },
}

pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptCommand>, RentalError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Where rental receipts go while a script runs.
pub struct ReceiptSink<'a> {
    pub dir: PathBuf,
    pub renderer: &'a dyn ReceiptRenderer,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScriptReport {
    pub executed: usize,
    pub failed: usize,
    pub receipts: Vec<PathBuf>,
}

/// Run every command. A failing command is reported and skipped; it never stops the
/// script and never leaves partial state behind.
pub fn run_script(
    service: &mut RentalService,
    commands: Vec<ScriptCommand>,
    receipts: Option<&ReceiptSink<'_>>,
) -> ScriptReport {
    let mut report = ScriptReport::default();
    for (index, command) in commands.into_iter().enumerate() {
        report.executed += 1;
        match run_command(service, command, receipts) {
            Ok(Some(path)) => report.receipts.push(path),
            Ok(None) => {}
            Err(err) => {
                warn!(step = index, %err, "script step failed");
                println!("step {index}: {err}");
                report.failed += 1;
            }
        }
    }
    report
}

fn run_command(
    service: &mut RentalService,
    command: ScriptCommand,
    receipts: Option<&ReceiptSink<'_>>,
) -> Result<Option<PathBuf>, RentalError> {
    match command {
        ScriptCommand::AddVehicle { vehicle } => {
            let label = vehicle.to_string();
            service.add_vehicle(vehicle)?;
            println!("added {label}");
        }
        ScriptCommand::UpdateVehicle { plate, update } => {
            let vehicle = service.update_vehicle(&plate, update)?;
            println!("updated {vehicle}");
        }
        ScriptCommand::RemoveVehicle { plate } => {
            let vehicle = service.remove_vehicle(&plate)?;
            println!("removed {vehicle}");
        }
        ScriptCommand::RegisterAccount { account } => {
            let name = account.name.clone();
            service.register_account(account)?;
            println!("registered {name}");
        }
        ScriptCommand::UpdateAccount { name, update } => {
            service.update_account(&name, update)?;
            println!("updated account {name}");
        }
        ScriptCommand::RemoveAccount { name } => {
            service.remove_account(&name)?;
            println!("removed account {name}");
        }
        ScriptCommand::Quote {
            class,
            passengers,
            origin,
        } => {
            let selection = service.select_vehicle(&TripRequest::new(class, passengers, origin));
            output::print_selection(service, &selection);
        }
        ScriptCommand::Rent {
            account,
            class,
            passengers,
            origin,
            destination,
        } => {
            let request = TripRequest::new(class, passengers, origin);
            let binding = match service.select_vehicle(&request) {
                Selection::Bound(binding) => binding,
                other => {
                    output::print_selection(service, &other);
                    return Err(RentalError::NoEligibleVehicle { class, passengers });
                }
            };
            let record = service.book_trip(&binding, destination, &account)?;
            output::print_trip(&record);
            if let Some(sink) = receipts {
                let receipt = service.receipt(&record)?;
                let path = write_receipt(&sink.dir, &receipt, sink.renderer)?;
                println!("receipt saved as {}", path.display());
                return Ok(Some(path));
            }
        }
        ScriptCommand::Status { plate } => {
            let status = service.status(&plate)?;
            output::print_status(&status);
        }
    }
    Ok(None)
}
