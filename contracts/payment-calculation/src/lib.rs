#![no_std]
#![allow(clippy::too_many_arguments)]

mod events;
mod ledgers;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};
pub use ledgers::{OutcomeLedgerClient, RiskEngineClient};
use storage::*;
pub use types::{DataKey, Error, PaymentModel, PaymentRecord};

/// Multiplier meaning "no adjustment" (1.00x, scaled by 100).
pub const NEUTRAL_MULTIPLIER: u32 = 100;

/// Currency components of a calculated payment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PaymentBreakdown {
    pub base_amount: i128,
    pub outcome_bonus: i128,
    pub risk_adjustment: i128,
    pub total_payment: i128,
}

/// Apply a payment model. Every step truncates; `None` on overflow.
///
/// 1. `base = base_payment * patients_treated`
/// 2. `bonus = outcome_bonus * successful_outcomes`
/// 3. `risk_adjustment = base * risk_multiplier / 100`
/// 4. `total = base + bonus + risk_adjustment`
pub fn compute_payment(
    model: &PaymentModel,
    patients_treated: u32,
    successful_outcomes: u32,
    risk_multiplier: u32,
) -> Option<PaymentBreakdown> {
    let base_amount = model.base_payment.checked_mul(i128::from(patients_treated))?;
    let outcome_bonus = model
        .outcome_bonus
        .checked_mul(i128::from(successful_outcomes))?;
    let risk_adjustment = base_amount.checked_mul(i128::from(risk_multiplier))? / 100;
    let total_payment = base_amount
        .checked_add(outcome_bonus)?
        .checked_add(risk_adjustment)?;

    Some(PaymentBreakdown {
        base_amount,
        outcome_bonus,
        risk_adjustment,
        total_payment,
    })
}

#[contract]
pub struct PaymentCalculationContract;

#[contractimpl]
impl PaymentCalculationContract {
    pub fn __constructor(
        env: Env,
        admin: Address,
        risk_engine: Address,
        outcome_ledger: Address,
    ) {
        save_config(&env, &admin, &risk_engine, &outcome_ledger);
    }

    /// Define a payment model. Ids start at 1 and are only consumed on success.
    pub fn create_model(
        env: Env,
        caller: Address,
        base_payment: i128,
        outcome_bonus: i128,
        risk_adjustment_factor: u32,
        minimum_patients: u32,
        payment_period: u32,
    ) -> Result<u64, Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if base_payment < 0 || outcome_bonus < 0 {
            return Err(Error::InvalidPayment);
        }

        let model = PaymentModel {
            base_payment,
            outcome_bonus,
            risk_adjustment_factor,
            minimum_patients,
            payment_period,
        };

        let model_id = next_model_id(&env);
        save_model(&env, model_id, &model);
        bump_instance(&env);

        events::publish_model_created(&env, model_id);

        Ok(model_id)
    }

    /// Calculate a provider's payment for a period from caller-supplied counts.
    ///
    /// Only the admin or the provider being paid may calculate. Returns the
    /// total payment.
    pub fn calculate(
        env: Env,
        caller: Address,
        model_id: u64,
        provider: Address,
        period: u64,
        patients_treated: u32,
        successful_outcomes: u32,
        risk_multiplier: u32,
    ) -> Result<i128, Error> {
        caller.require_auth();
        Self::require_admin_or_provider(&env, &caller, &provider)?;

        Self::settle(
            &env,
            model_id,
            provider,
            period,
            patients_treated,
            successful_outcomes,
            risk_multiplier,
        )
    }

    /// Calculate a provider's payment for a period from a patient cohort.
    ///
    /// Successful outcomes come from the outcome ledger and the multiplier is
    /// the truncated mean of the cohort's risk multipliers. A patient whose
    /// outcome another provider recorded is rejected. An outcome earns its
    /// bonus once; later cohorts still count the patient as treated.
    pub fn calculate_from_ledgers(
        env: Env,
        caller: Address,
        model_id: u64,
        provider: Address,
        period: u64,
        patients: Vec<Address>,
    ) -> Result<i128, Error> {
        caller.require_auth();
        Self::require_admin_or_provider(&env, &caller, &provider)?;

        let risk = RiskEngineClient::new(
            &env,
            &load_risk_engine(&env).ok_or(Error::InvalidPayment)?,
        );
        let outcomes = OutcomeLedgerClient::new(
            &env,
            &load_outcome_ledger(&env).ok_or(Error::InvalidPayment)?,
        );

        let mut cohort: Vec<Address> = Vec::new(&env);
        let mut credited: Vec<Address> = Vec::new(&env);
        let mut multiplier_sum: u64 = 0;
        for patient in patients.iter() {
            if cohort.contains(&patient) {
                return Err(Error::InvalidPayment);
            }
            match outcomes.get_recorder(&patient) {
                Some(recorder) if recorder != provider => {
                    return Err(Error::InvalidPayment);
                }
                Some(_)
                    if !is_bonus_credited(&env, &patient) && outcomes.is_successful(&patient) =>
                {
                    credited.push_back(patient.clone());
                }
                _ => {}
            }
            multiplier_sum += u64::from(risk.get_multiplier(&patient));
            cohort.push_back(patient);
        }
        let successful_outcomes = credited.len();

        let patients_treated = cohort.len();
        let risk_multiplier = if patients_treated == 0 {
            NEUTRAL_MULTIPLIER
        } else {
            u32::try_from(multiplier_sum / u64::from(patients_treated))
                .map_err(|_| Error::InvalidPayment)?
        };

        let total = Self::settle(
            &env,
            model_id,
            provider,
            period,
            patients_treated,
            successful_outcomes,
            risk_multiplier,
        )?;

        for patient in credited.iter() {
            credit_bonus(&env, &patient);
        }

        Ok(total)
    }

    /// Flag a calculated payment as paid. Repeating it is a no-op.
    pub fn mark_paid(
        env: Env,
        caller: Address,
        provider: Address,
        period: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut record = load_payment(&env, &provider, period).ok_or(Error::InvalidPayment)?;
        if !record.paid {
            record.paid = true;
            save_payment(&env, &provider, &record);
        }

        events::publish_payment_completed(&env, provider, period);

        Ok(())
    }

    /// Payment calculated for the provider and period, if any.
    pub fn get_payment(env: Env, provider: Address, period: u64) -> Option<PaymentRecord> {
        load_payment(&env, &provider, period)
    }

    /// Stored payment model by id.
    pub fn get_model(env: Env, model_id: u64) -> Option<PaymentModel> {
        load_model(&env, model_id)
    }

    /// Number of models created; also the last issued id.
    pub fn get_model_count(env: Env) -> u64 {
        model_count(&env)
    }

    /// Periods with a calculated payment for the provider, oldest first.
    pub fn get_provider_periods(env: Env, provider: Address) -> Vec<u64> {
        load_provider_periods(&env, &provider)
    }

    /// Admin fixed at deployment.
    pub fn get_admin(env: Env) -> Option<Address> {
        load_admin(&env)
    }
}

impl PaymentCalculationContract {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        match load_admin(env) {
            Some(admin) if admin == *caller => Ok(()),
            _ => Err(Error::Unauthorized),
        }
    }

    fn require_admin_or_provider(
        env: &Env,
        caller: &Address,
        provider: &Address,
    ) -> Result<(), Error> {
        if caller == provider {
            return Ok(());
        }
        Self::require_admin(env, caller)
    }

    fn settle(
        env: &Env,
        model_id: u64,
        provider: Address,
        period: u64,
        patients_treated: u32,
        successful_outcomes: u32,
        risk_multiplier: u32,
    ) -> Result<i128, Error> {
        let model = load_model(env, model_id).ok_or(Error::InvalidPayment)?;

        if has_payment(env, &provider, period) {
            return Err(Error::PaymentExists);
        }

        if patients_treated < model.minimum_patients {
            return Err(Error::InsufficientOutcomes);
        }

        if successful_outcomes > patients_treated {
            return Err(Error::InvalidPayment);
        }

        let breakdown = compute_payment(
            &model,
            patients_treated,
            successful_outcomes,
            risk_multiplier,
        )
        .ok_or(Error::InvalidPayment)?;

        log!(
            env,
            "payment base {} bonus {} risk {} total {}",
            breakdown.base_amount,
            breakdown.outcome_bonus,
            breakdown.risk_adjustment,
            breakdown.total_payment
        );

        let record = PaymentRecord {
            model_id,
            period,
            base_amount: breakdown.base_amount,
            outcome_bonus: breakdown.outcome_bonus,
            risk_adjustment: breakdown.risk_adjustment,
            total_payment: breakdown.total_payment,
            patients_treated,
            successful_outcomes,
            payment_block: env.ledger().sequence(),
            paid: false,
        };
        save_payment(env, &provider, &record);
        add_provider_period(env, &provider, period);
        bump_instance(env);

        events::publish_payment_calculated(env, provider, period, breakdown.total_payment);

        Ok(breakdown.total_payment)
    }
}
