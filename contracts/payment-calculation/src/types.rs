use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 500,
    InvalidPayment = 501,
    PaymentExists = 502,
    InsufficientOutcomes = 503,
}

/// Admin-defined parameters for computing a provider's period payment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentModel {
    /// Currency units per patient treated.
    pub base_payment: i128,
    /// Currency units per successful outcome.
    pub outcome_bonus: i128,
    /// Percentage scaled by 100 (110 = 1.10x).
    pub risk_adjustment_factor: u32,
    pub minimum_patients: u32,
    /// Length of a payment period in ledgers.
    pub payment_period: u32,
}

/// Calculated payment for one provider and period.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRecord {
    pub model_id: u64,
    pub period: u64,
    pub base_amount: i128,
    pub outcome_bonus: i128,
    pub risk_adjustment: i128,
    pub total_payment: i128,
    pub patients_treated: u32,
    pub successful_outcomes: u32,
    pub payment_block: u32,
    pub paid: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    RiskEngine,
    OutcomeLedger,
    /// Last issued model id.
    ModelCounter,
    /// model_id -> PaymentModel
    Model(u64),
    /// (provider, period) -> PaymentRecord
    Payment(Address, u64),
    /// provider -> Vec<u64> (periods)
    ProviderPeriods(Address),
    /// patient -> bool, set once the patient's outcome bonus has been paid
    BonusCredited(Address),
}
