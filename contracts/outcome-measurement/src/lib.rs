#![no_std]

mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};
use storage::*;
pub use types::{DataKey, Error, OutcomeRecord, ProviderRegistryClient};

/// `(current - baseline) * 100 / baseline`, truncated toward zero.
///
/// `None` for a non-positive baseline or on overflow.
pub fn improvement_percentage(baseline_value: i64, current_value: i64) -> Option<i64> {
    if baseline_value <= 0 {
        return None;
    }
    current_value
        .checked_sub(baseline_value)?
        .checked_mul(100)?
        .checked_div(baseline_value)
}

#[contract]
pub struct OutcomeMeasurementContract;

#[contractimpl]
impl OutcomeMeasurementContract {
    pub fn __constructor(env: Env, admin: Address, provider_registry: Address) {
        save_config(&env, &admin, &provider_registry);
    }

    pub fn set_threshold(env: Env, caller: Address, threshold: i64) -> Result<(), Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        save_threshold(&env, threshold);

        env.events()
            .publish((symbol_short!("threshold"),), threshold);

        Ok(())
    }

    /// Record a patient's baseline and current measurement.
    ///
    /// Only providers the registry reports as verified may record. Returns the
    /// improvement percentage.
    pub fn record(
        env: Env,
        caller: Address,
        patient: Address,
        baseline_value: i64,
        current_value: i64,
    ) -> Result<i64, Error> {
        caller.require_auth();

        let registry = load_provider_registry(&env).ok_or(Error::Unauthorized)?;
        if !ProviderRegistryClient::new(&env, &registry).is_verified(&caller) {
            return Err(Error::Unauthorized);
        }

        if current_value < 0 {
            return Err(Error::InvalidOutcome);
        }
        let improvement = improvement_percentage(baseline_value, current_value)
            .ok_or(Error::InvalidOutcome)?;

        if has_outcome(&env, &patient) {
            return Err(Error::OutcomeExists);
        }

        let record = OutcomeRecord {
            baseline_value,
            current_value,
            improvement_percentage: improvement,
            measurement_block: env.ledger().sequence(),
            recorded_by: caller.clone(),
            verified: false,
        };
        save_outcome(&env, &patient, &record);
        add_provider_outcome(&env, &caller, &patient);
        bump_instance(&env);

        env.events().publish(
            (symbol_short!("out_rec"),),
            (patient, caller, improvement),
        );

        Ok(improvement)
    }

    /// Mark a recorded outcome as verified. Re-verifying is a no-op.
    pub fn verify(env: Env, caller: Address, patient: Address) -> Result<(), Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut record = load_outcome(&env, &patient).ok_or(Error::PatientNotFound)?;
        if !record.verified {
            record.verified = true;
            save_outcome(&env, &patient, &record);
        }

        env.events()
            .publish((symbol_short!("out_ver"),), patient);

        Ok(())
    }

    /// False when the patient has no outcome.
    pub fn meets_threshold(env: Env, patient: Address) -> bool {
        load_outcome(&env, &patient)
            .map(|record| record.improvement_percentage >= load_threshold(&env))
            .unwrap_or(false)
    }

    /// Verified and meeting the threshold: what counts toward an outcome bonus.
    pub fn is_successful(env: Env, patient: Address) -> bool {
        load_outcome(&env, &patient)
            .map(|record| {
                record.verified && record.improvement_percentage >= load_threshold(&env)
            })
            .unwrap_or(false)
    }

    /// Provider that recorded the patient's outcome.
    pub fn get_recorder(env: Env, patient: Address) -> Option<Address> {
        load_outcome(&env, &patient).map(|record| record.recorded_by)
    }

    pub fn get_outcome(env: Env, patient: Address) -> Option<OutcomeRecord> {
        load_outcome(&env, &patient)
    }

    /// Patients whose outcomes the provider recorded, in recording order.
    pub fn get_provider_outcomes(env: Env, provider: Address) -> Vec<Address> {
        load_provider_outcomes(&env, &provider)
    }

    /// Minimum improvement percentage; 0 until set.
    pub fn get_threshold(env: Env) -> i64 {
        load_threshold(&env)
    }

    /// Admin fixed at deployment.
    pub fn get_admin(env: Env) -> Option<Address> {
        load_admin(&env)
    }
}

impl OutcomeMeasurementContract {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        match load_admin(env) {
            Some(admin) if admin == *caller => Ok(()),
            _ => Err(Error::Unauthorized),
        }
    }
}
