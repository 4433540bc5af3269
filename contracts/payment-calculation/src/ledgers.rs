//! Read-only views of the sibling ledgers a cohort payment is derived from.
//!
//! Any contract exposing these functions can be wired in at deployment.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "RiskEngineClient")]
pub trait RiskEngine {
    /// Patient risk multiplier scaled by 100.
    fn get_multiplier(env: Env, patient: Address) -> u32;
}

#[contractclient(name = "OutcomeLedgerClient")]
pub trait OutcomeLedger {
    /// Whether the patient's outcome counts toward an outcome bonus.
    fn is_successful(env: Env, patient: Address) -> bool;

    /// Provider that recorded the patient's outcome, if one was recorded.
    fn get_recorder(env: Env, patient: Address) -> Option<Address>;
}
