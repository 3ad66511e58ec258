use crate::fleet::VehicleClass;

/// Errors surfaced by the rental engine and its export/receipt helpers.
///
/// None of these are fatal to the process: each one aborts the request that produced it
/// and leaves the fleet, accounts and ledger as they were before the request.
#[derive(Debug, thiserror::Error)]
pub enum RentalError {
    #[error("no vehicle with plate '{0}'")]
    VehicleNotFound(String),

    #[error("no account named '{0}'")]
    AccountNotFound(String),

    #[error("vehicle '{0}' is not available for rental")]
    VehicleUnavailable(String),

    #[error("no eligible {class} vehicle for {passengers} passenger(s)")]
    NoEligibleVehicle {
        class: VehicleClass,
        passengers: u32,
    },

    #[error("no rate defined for vehicle class {0}")]
    PricingUndefined(VehicleClass),

    #[error("cost of {distance} units in class {class} exceeds the representable fare")]
    CostOverflow { class: VehicleClass, distance: u32 },

    #[error("payment of {amount} declined for '{account}': {reason}")]
    PaymentDeclined {
        account: String,
        amount: u32,
        reason: String,
    },

    #[error("a vehicle with plate '{0}' already exists")]
    DuplicatePlate(String),

    #[error("an account named '{0}' already exists")]
    DuplicateAccount(String),

    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = RentalError> = std::result::Result<T, E>;
