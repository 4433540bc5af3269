#![no_std]

mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;
pub use types::{DataKey, Error, RiskFactorWeight, RiskScore};

/// Score every patient starts from before factor weights are added.
pub const BASE_RISK_SCORE: u32 = 100;
/// Multiplier meaning "no adjustment" (1.00x, scaled by 100).
pub const NEUTRAL_MULTIPLIER: u32 = 100;
pub const MAX_FACTOR_WEIGHT: i64 = 1_000;
pub const MAX_RISK_FACTORS: u32 = 20;

/// Ratio of adjusted to base score, scaled by 100 and truncated.
///
/// A zero base score yields [`NEUTRAL_MULTIPLIER`] rather than dividing by zero.
/// `None` when the result does not fit in a `u32`.
pub fn risk_multiplier(base_risk_score: u32, adjusted_risk_score: u32) -> Option<u32> {
    if base_risk_score == 0 {
        return Some(NEUTRAL_MULTIPLIER);
    }
    let scaled = u64::from(adjusted_risk_score) * 100 / u64::from(base_risk_score);
    u32::try_from(scaled).ok()
}

#[contract]
pub struct RiskAdjustmentContract;

#[contractimpl]
impl RiskAdjustmentContract {
    pub fn __constructor(env: Env, admin: Address) {
        save_admin(&env, &admin);
    }

    /// Set or overwrite the weight of a named risk factor.
    pub fn set_weight(
        env: Env,
        caller: Address,
        factor: String,
        weight: i64,
        category: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        if load_admin(&env) != Some(caller) {
            return Err(Error::Unauthorized);
        }

        if factor.len() == 0 || !(0..=MAX_FACTOR_WEIGHT).contains(&weight) {
            return Err(Error::InvalidRiskFactor);
        }
        let weight = u32::try_from(weight).map_err(|_| Error::InvalidRiskFactor)?;

        save_weight(&env, &factor, &RiskFactorWeight { weight, category });
        bump_instance(&env);

        env.events()
            .publish((symbol_short!("wgt_set"),), (factor, weight));

        Ok(())
    }

    /// Compute and store a patient's adjusted risk score.
    ///
    /// The patient must authorize the call. Factors without a registered
    /// weight contribute nothing. A name listed more than once is counted once.
    pub fn calculate_score(env: Env, patient: Address, factors: Vec<String>) -> Result<u32, Error> {
        patient.require_auth();

        if factors.len() > MAX_RISK_FACTORS {
            return Err(Error::InvalidRiskFactor);
        }

        let mut distinct: Vec<String> = Vec::new(&env);
        let mut adjusted = BASE_RISK_SCORE;
        for factor in factors.iter() {
            if distinct.contains(&factor) {
                continue;
            }
            if let Some(entry) = load_weight(&env, &factor) {
                adjusted = adjusted
                    .checked_add(entry.weight)
                    .ok_or(Error::InvalidRiskFactor)?;
            }
            distinct.push_back(factor);
        }
        // Every stored score must have a representable multiplier.
        risk_multiplier(BASE_RISK_SCORE, adjusted).ok_or(Error::InvalidRiskFactor)?;

        let score = RiskScore {
            base_risk_score: BASE_RISK_SCORE,
            adjusted_risk_score: adjusted,
            risk_factors: distinct,
            calculation_block: env.ledger().sequence(),
        };
        save_score(&env, &patient, &score);
        bump_instance(&env);

        env.events()
            .publish((symbol_short!("risk_calc"),), (patient, adjusted));

        Ok(adjusted)
    }

    /// Patient multiplier scaled by 100; 100 when no score has been calculated.
    pub fn get_multiplier(env: Env, patient: Address) -> u32 {
        load_score(&env, &patient)
            .and_then(|score| risk_multiplier(score.base_risk_score, score.adjusted_risk_score))
            .unwrap_or(NEUTRAL_MULTIPLIER)
    }

    /// Latest stored score for the patient, if any.
    pub fn get_score(env: Env, patient: Address) -> Option<RiskScore> {
        load_score(&env, &patient)
    }

    /// Registered weight and category of a factor.
    pub fn get_weight(env: Env, factor: String) -> Option<RiskFactorWeight> {
        load_weight(&env, &factor)
    }

    /// Admin fixed at deployment.
    pub fn get_admin(env: Env) -> Option<Address> {
        load_admin(&env)
    }
}
