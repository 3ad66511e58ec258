mod support;

use rental_core::accounts::{Account, AccountUpdate};
use rental_core::config::RentalConfig;
use rental_core::fleet::{VehicleClass, VehicleUpdate};
use rental_core::request::{parse_plate, TripRequest};
use rental_core::seed::SeedData;
use rental_core::test_helpers::{demo_service, vehicle};
use rental_core::zone::Zone;
use rental_core::{RentalError, RentalService};
use support::fleet::VehicleBuilder;
use support::service::{TestServiceBuilder, CUSTOMER};

#[test]
fn added_vehicle_becomes_selectable() {
    let mut service = TestServiceBuilder::new().build();
    let request = TripRequest::new(VehicleClass::MidClass, 4, Zone::Middle);
    assert!(service.select_vehicle(&request).binding().is_none());

    service
        .add_vehicle(vehicle("MID1", VehicleClass::MidClass, Zone::Outer))
        .expect("add");

    let selection = service.select_vehicle(&request);
    assert_eq!(selection.binding().map(|b| b.plate.as_str()), Some("MID1"));
}

#[test]
fn duplicate_plate_is_rejected_by_service() {
    let mut service = TestServiceBuilder::new()
        .with_vehicle(VehicleBuilder::new("ECO1").build())
        .build();
    let err = service
        .add_vehicle(vehicle("ECO1", VehicleClass::Deluxe, Zone::Outer))
        .unwrap_err();
    assert!(matches!(err, RentalError::DuplicatePlate(_)));
    assert_eq!(
        service.fleet().find_by_plate("ECO1").map(|v| v.class),
        Some(VehicleClass::Economy)
    );
}

#[test]
fn class_change_moves_vehicle_between_pools() {
    let mut service = TestServiceBuilder::new()
        .with_vehicle(VehicleBuilder::new("CAR1").build())
        .build();

    service
        .update_vehicle(
            "CAR1",
            VehicleUpdate {
                class: Some(VehicleClass::Deluxe),
                brand: Some("Mercedes".to_string()),
                ..Default::default()
            },
        )
        .expect("update");

    let eco = service.select_vehicle(&TripRequest::new(VehicleClass::Economy, 1, Zone::Inner));
    assert!(eco.binding().is_none());
    let deluxe = service.select_vehicle(&TripRequest::new(VehicleClass::Deluxe, 6, Zone::Inner));
    assert_eq!(deluxe.binding().map(|b| b.plate.as_str()), Some("CAR1"));
}

#[test]
fn removed_vehicle_is_gone() {
    let mut service = demo_service();
    let removed = service.remove_vehicle("DEF789").expect("remove");
    assert_eq!(removed.class, VehicleClass::Deluxe);
    assert!(matches!(
        service.status("DEF789"),
        Err(RentalError::VehicleNotFound(_))
    ));
    assert_eq!(service.fleet().len(), 4);
}

#[test]
fn account_lifecycle() {
    let mut service = TestServiceBuilder::new().build();

    service
        .register_account(Account::new("Giulia", "Bianchi", "Via B", "GHI", "LMN"))
        .expect("register");
    assert!(matches!(
        service.register_account(Account::new("Giulia", "Other", "Via X", "1", "2")),
        Err(RentalError::DuplicateAccount(_))
    ));

    let updated = service
        .update_account(
            "Giulia",
            AccountUpdate {
                credit_card: Some("NEW".to_string()),
                ..Default::default()
            },
        )
        .expect("update");
    assert_eq!(updated.credit_card, "NEW");
    assert_eq!(updated.surname, "Bianchi");

    service.remove_account("Giulia").expect("remove");
    assert!(service.accounts().find_by_name("Giulia").is_none());
    assert!(service.accounts().find_by_name(CUSTOMER).is_some());
}

#[test]
fn deleted_account_cannot_rent() {
    let mut service = TestServiceBuilder::new()
        .with_vehicle(VehicleBuilder::new("ECO1").build())
        .build();
    service.remove_account(CUSTOMER).expect("remove");

    let err = service
        .rent(
            &TripRequest::new(VehicleClass::Economy, 1, Zone::Inner),
            Zone::Outer,
            CUSTOMER,
        )
        .unwrap_err();
    assert!(matches!(err, RentalError::AccountNotFound(_)));
    assert!(service.fleet().find_by_plate("ECO1").expect("vehicle").available);
}

#[test]
fn invalid_seed_entries_are_skipped() {
    let seed = SeedData {
        vehicles: vec![
            vehicle("DUP", VehicleClass::Economy, Zone::Inner),
            vehicle("DUP", VehicleClass::Deluxe, Zone::Outer),
        ],
        accounts: vec![
            Account::new("Martina", "Rossi", "Via C", "OPQ", "RST"),
            Account::new("", "Blank", "Via D", "1", "2"),
        ],
    };
    let service = RentalService::with_seed(RentalConfig::default(), seed);

    assert_eq!(service.fleet().len(), 1);
    assert_eq!(
        service.fleet().find_by_plate("DUP").map(|v| v.class),
        Some(VehicleClass::Economy)
    );
    assert_eq!(service.accounts().len(), 1);
}

#[test]
fn seeded_plates_resolve_through_cli_normalization() {
    let seed = SeedData::from_json_str(
        r#"{ "vehicles": [
              { "plate": "abc1", "class": "economy", "brand": "Fiat", "model": "Panda",
                "zone": "inner" },
              { "plate": "", "class": "economy", "brand": "Fiat", "model": "Uno",
                "zone": "inner" },
              { "plate": "SVC", "class": "economy", "brand": "Fiat", "model": "Tipo",
                "zone": "inner", "in_service": true }
            ] }"#,
    )
    .expect("seed");
    let mut service = RentalService::with_seed(RentalConfig::default(), seed);

    assert_eq!(service.fleet().len(), 1);
    let plate = parse_plate("abc1").expect("plate");
    let status = service.status(&plate).expect("status");
    assert_eq!(status.plate, "ABC1");
    assert_eq!(service.status(" abc1 ").expect("status").plate, "ABC1");

    service
        .update_vehicle(
            "Abc1",
            VehicleUpdate {
                zone: Some(Zone::Outer),
                ..Default::default()
            },
        )
        .expect("update");
    assert_eq!(service.fleet().find_by_plate("ABC1").map(|v| v.zone), Some(Zone::Outer));
}

#[test]
fn in_service_vehicle_is_never_rented() {
    let mut service = TestServiceBuilder::new().build();
    let mut svc = vehicle("SVC", VehicleClass::Economy, Zone::Inner);
    svc.in_service = true;

    let err = service.add_vehicle(svc).unwrap_err();
    assert!(matches!(err, RentalError::InvalidInput { .. }));

    let request = TripRequest::new(VehicleClass::Economy, 1, Zone::Inner);
    assert!(service.select_vehicle(&request).binding().is_none());
    assert!(matches!(
        service.rent(&request, Zone::Outer, CUSTOMER),
        Err(RentalError::NoEligibleVehicle { .. })
    ));
}
