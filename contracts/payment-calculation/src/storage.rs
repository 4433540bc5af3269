use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, PaymentModel, PaymentRecord};

const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

// -----------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------

pub fn save_config(env: &Env, admin: &Address, risk_engine: &Address, outcome_ledger: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::RiskEngine, risk_engine);
    env.storage()
        .instance()
        .set(&DataKey::OutcomeLedger, outcome_ledger);
    env.storage().instance().set(&DataKey::ModelCounter, &0u64);
    bump_instance(env);
}

pub fn load_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn load_risk_engine(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::RiskEngine)
}

pub fn load_outcome_ledger(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::OutcomeLedger)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// -----------------------------------------------------------------------
// Models
// -----------------------------------------------------------------------

pub fn model_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ModelCounter)
        .unwrap_or(0)
}

/// Only call once the model is certain to be stored.
pub fn next_model_id(env: &Env) -> u64 {
    let next = model_count(env) + 1;
    env.storage().instance().set(&DataKey::ModelCounter, &next);
    next
}

pub fn save_model(env: &Env, model_id: u64, model: &PaymentModel) {
    let key = DataKey::Model(model_id);
    env.storage().persistent().set(&key, model);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_model(env: &Env, model_id: u64) -> Option<PaymentModel> {
    env.storage().persistent().get(&DataKey::Model(model_id))
}

// -----------------------------------------------------------------------
// Payments
// -----------------------------------------------------------------------

pub fn has_payment(env: &Env, provider: &Address, period: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Payment(provider.clone(), period))
}

pub fn save_payment(env: &Env, provider: &Address, record: &PaymentRecord) {
    let key = DataKey::Payment(provider.clone(), record.period);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_payment(env: &Env, provider: &Address, period: u64) -> Option<PaymentRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Payment(provider.clone(), period))
}

pub fn add_provider_period(env: &Env, provider: &Address, period: u64) {
    let key = DataKey::ProviderPeriods(provider.clone());
    let mut periods = load_provider_periods(env, provider);
    periods.push_back(period);
    env.storage().persistent().set(&key, &periods);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_provider_periods(env: &Env, provider: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::ProviderPeriods(provider.clone()))
        .unwrap_or(Vec::new(env))
}

// -----------------------------------------------------------------------
// Outcome bonuses
// -----------------------------------------------------------------------

pub fn is_bonus_credited(env: &Env, patient: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::BonusCredited(patient.clone()))
}

pub fn credit_bonus(env: &Env, patient: &Address) {
    let key = DataKey::BonusCredited(patient.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
