use soroban_sdk::{contracterror, contractclient, contracttype, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 300,
    InvalidOutcome = 301,
    PatientNotFound = 302,
    OutcomeExists = 303,
}

/// Read interface this ledger needs from the provider registry.
#[contractclient(name = "ProviderRegistryClient")]
pub trait ProviderRegistry {
    fn is_verified(env: Env, provider: Address) -> bool;
}

/// A patient's clinical measurement pair. At most one per patient.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutcomeRecord {
    pub baseline_value: i64,
    pub current_value: i64,
    /// Fixed when recorded; verification leaves it untouched.
    pub improvement_percentage: i64,
    pub measurement_block: u32,
    pub recorded_by: Address,
    pub verified: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    ProviderRegistry,
    Threshold,
    /// patient -> OutcomeRecord
    Outcome(Address),
    /// provider -> Vec<Address> (patients)
    ProviderOutcomes(Address),
}
