use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 400,
    InvalidRiskFactor = 401,
}

/// Admin-assigned weight for a named risk factor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RiskFactorWeight {
    pub weight: u32,
    pub category: String,
}

/// Latest risk calculation for a patient. Recalculation overwrites it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RiskScore {
    pub base_risk_score: u32,
    pub adjusted_risk_score: u32,
    /// Factor names in the order supplied, duplicates removed.
    pub risk_factors: Vec<String>,
    pub calculation_block: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    /// factor name -> RiskFactorWeight
    Weight(String),
    /// patient -> RiskScore
    Score(Address),
}
