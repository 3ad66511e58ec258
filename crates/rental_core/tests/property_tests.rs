mod support;

use proptest::prelude::*;
use rental_core::config::RentalConfig;
use rental_core::dispatch::{apply_trip, Selection};
use rental_core::fleet::{Vehicle, VehicleClass, SERVICE_THRESHOLD};
use rental_core::request::TripRequest;
use rental_core::seed::SeedData;
use rental_core::test_helpers::{fixed_clock, test_account};
use rental_core::zone::{distance, Zone};
use rental_core::RentalService;
use support::fleet::VehicleBuilder;

fn zone() -> impl Strategy<Value = Zone> {
    prop::sample::select(Zone::ALL.to_vec())
}

fn class() -> impl Strategy<Value = VehicleClass> {
    prop::sample::select(VehicleClass::ALL.to_vec())
}

fn fleet() -> impl Strategy<Value = Vec<Vehicle>> {
    prop::collection::vec((class(), zone(), any::<bool>()), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (class, zone, available))| {
                let builder = VehicleBuilder::new(&format!("P{i:03}"))
                    .with_class(class)
                    .with_zone(zone);
                if available {
                    builder.build()
                } else {
                    builder.unavailable().build()
                }
            })
            .collect()
    })
}

fn service_with(vehicles: Vec<Vehicle>) -> RentalService {
    let seed = SeedData {
        vehicles,
        accounts: vec![test_account("tester")],
    };
    RentalService::with_seed(RentalConfig::default(), seed).with_clock(fixed_clock())
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in zone(), b in zone()) {
        prop_assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn distance_is_five_within_a_zone_and_tens_across(a in zone(), b in zone()) {
        let d = distance(a, b);
        if a == b {
            prop_assert_eq!(d, 5);
        } else {
            prop_assert_eq!(d % 10, 0);
            prop_assert!(d == 10 || d == 20);
        }
    }

    #[test]
    fn selection_picks_earliest_nearest_eligible_vehicle(
        vehicles in fleet(),
        class in class(),
        passengers in 0u32..8,
        origin in zone(),
    ) {
        let service = service_with(vehicles.clone());
        let capacity = service.config().pricing.capacity(class).unwrap_or(0);
        let eligible: Vec<&Vehicle> = vehicles
            .iter()
            .filter(|v| v.class == class && v.available && capacity >= passengers)
            .collect();

        let selection = service.select_vehicle(&TripRequest::new(class, passengers, origin));

        match eligible.iter().map(|v| distance(v.zone, origin)).min() {
            Some(best) => {
                let expected = eligible
                    .iter()
                    .find(|v| distance(v.zone, origin) == best)
                    .map(|v| v.plate.clone());
                let chosen = selection.binding().map(|b| b.plate.clone());
                prop_assert_eq!(chosen, expected);
            }
            None => prop_assert!(matches!(selection, Selection::Wait(_))),
        }
    }

    #[test]
    fn booking_moves_vehicle_and_takes_it_off_the_market(
        origin_zone in zone(),
        destination in zone(),
        odometer in 0u32..1500,
    ) {
        let vehicle = VehicleBuilder::new("P000")
            .with_zone(origin_zone)
            .with_odometer(odometer)
            .build();
        let mut service = service_with(vec![vehicle]);

        let record = service
            .rent(&TripRequest::new(VehicleClass::Economy, 1, origin_zone), destination, "tester")
            .expect("rent");
        let after = service.fleet().find_by_plate("P000").expect("vehicle");

        prop_assert_eq!(after.zone, destination);
        prop_assert!(!after.available);
        prop_assert_eq!(record.cost, record.distance);
        if odometer + record.distance >= SERVICE_THRESHOLD {
            prop_assert!(after.in_service);
            prop_assert_eq!(after.cumulative_distance, 0);
        } else {
            prop_assert!(!after.in_service);
            prop_assert_eq!(after.cumulative_distance, odometer + record.distance);
        }
    }

    #[test]
    fn two_trips_accumulate_with_reset(d1 in 0u32..1600, d2 in 0u32..1600) {
        let fresh = Vehicle::new("P000", VehicleClass::MidClass, "Honda", "Accord", Zone::Inner);
        let (first, _) = apply_trip(&fresh, Zone::Middle, d1, SERVICE_THRESHOLD);
        let (second, _) = apply_trip(&first, Zone::Outer, d2, SERVICE_THRESHOLD);

        if d1 >= SERVICE_THRESHOLD {
            prop_assert!(second.in_service);
            prop_assert_eq!(second.cumulative_distance, if d2 >= SERVICE_THRESHOLD { 0 } else { d2 });
        } else if d1 + d2 >= SERVICE_THRESHOLD {
            prop_assert!(second.in_service);
            prop_assert_eq!(second.cumulative_distance, 0);
        } else {
            prop_assert!(!second.in_service);
            prop_assert_eq!(second.cumulative_distance, d1 + d2);
        }
        prop_assert!(!second.available);
        prop_assert_eq!(
            second.next_service_remaining,
            i64::from(SERVICE_THRESHOLD) - i64::from(second.cumulative_distance)
        );
    }
}
