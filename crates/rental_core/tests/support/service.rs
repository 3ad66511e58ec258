use rental_core::accounts::{Account, PaymentGateway};
use rental_core::config::RentalConfig;
use rental_core::fleet::Vehicle;
use rental_core::seed::SeedData;
use rental_core::test_helpers::{fixed_clock, test_account};
use rental_core::RentalService;

/// The account every service built by [`TestServiceBuilder`] has registered.
pub const CUSTOMER: &str = "Federica";

/// Builds a [`RentalService`] with a fixed clock and a known customer.
#[derive(Debug, Default)]
pub struct TestServiceBuilder {
    config: RentalConfig,
    vehicles: Vec<Vehicle>,
    accounts: Vec<Account>,
    gateway: Option<Box<dyn PaymentGateway>>,
}

impl TestServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: RentalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    pub fn with_gateway(mut self, gateway: Box<dyn PaymentGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    pub fn build(self) -> RentalService {
        let mut accounts = vec![test_account(CUSTOMER)];
        accounts.extend(self.accounts);
        let seed = SeedData {
            vehicles: self.vehicles,
            accounts,
        };
        let service = RentalService::with_seed(self.config, seed).with_clock(fixed_clock());
        match self.gateway {
            Some(gateway) => service.with_gateway(gateway),
            None => service,
        }
    }
}
