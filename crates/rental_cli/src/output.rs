//! Human-readable console output for the CLI.

use rental_core::dispatch::Selection;
use rental_core::ledger::{TripLedger, TripRecord};
use rental_core::service::VehicleStatus;
use rental_core::RentalService;

pub fn print_fleet(service: &RentalService) {
    println!(
        "{:<10} {:<9} {:<16} {:<14} {:>8} {:>9}  state",
        "plate", "class", "car", "zone", "odometer", "service"
    );
    for vehicle in service.fleet().iter() {
        let state = if vehicle.in_service {
            "in service"
        } else if vehicle.available {
            "available"
        } else {
            "rented"
        };
        println!(
            "{:<10} {:<9} {:<16} {:<14} {:>8} {:>9}  {}",
            vehicle.plate,
            vehicle.class.label(),
            format!("{} {}", vehicle.brand, vehicle.model),
            vehicle.zone.label(),
            vehicle.cumulative_distance,
            vehicle.next_service_remaining,
            state
        );
    }
}

pub fn print_selection(service: &RentalService, selection: &Selection) {
    match selection {
        Selection::Bound(binding) => {
            match service.fleet().find_by_plate(&binding.plate) {
                Some(vehicle) => println!("Car found: {vehicle} in {}", vehicle.zone),
                None => println!("Car found: {}", binding.plate),
            }
            println!(
                "Pickup at {} ({} units away)",
                binding.origin, binding.approach_distance
            );
        }
        Selection::Wait(wait) => println!(
            "Sorry, the requested {} car is not available. \
             The maximum waiting time is approximately {:.2} hours",
            wait.class, wait.hours
        ),
        Selection::NoneAvailable => println!("No suitable car is available"),
    }
}

pub fn print_trip(record: &TripRecord) {
    println!(
        "Rented {} for {}: {} -> {}, {} units, cost {}",
        record.plate,
        record.account,
        record.origin,
        record.destination,
        record.distance,
        record.cost
    );
}

pub fn print_status(status: &VehicleStatus) {
    println!("Car {}", status.plate);
    println!("  location: {}", status.location);
    println!("  total distance: {}", status.cumulative_distance);
    println!("  distance to next service: {}", status.next_service_remaining);
    println!("  in service: {}", if status.in_service { "yes" } else { "no" });
    println!("  available: {}", if status.available { "yes" } else { "no" });
}

pub fn print_ledger_summary(ledger: &TripLedger) {
    let intra_zone = ledger.records().iter().filter(|r| r.is_intra_zone()).count();
    println!(
        "{} trips ({} within one zone), {} units driven, revenue {}",
        ledger.len(),
        intra_zone,
        ledger.total_distance(),
        ledger.total_revenue()
    );
}
