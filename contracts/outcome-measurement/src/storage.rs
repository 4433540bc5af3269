use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, OutcomeRecord};

const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

// -----------------------------------------------------------------------
// Configuration
// -----------------------------------------------------------------------

pub fn save_config(env: &Env, admin: &Address, provider_registry: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage()
        .instance()
        .set(&DataKey::ProviderRegistry, provider_registry);
    bump_instance(env);
}

pub fn load_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn load_provider_registry(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::ProviderRegistry)
}

pub fn save_threshold(env: &Env, threshold: i64) {
    env.storage().instance().set(&DataKey::Threshold, &threshold);
    bump_instance(env);
}

/// Zero until the admin sets one.
pub fn load_threshold(env: &Env) -> i64 {
    env.storage()
        .instance()
        .get(&DataKey::Threshold)
        .unwrap_or(0)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// -----------------------------------------------------------------------
// Outcomes
// -----------------------------------------------------------------------

pub fn has_outcome(env: &Env, patient: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Outcome(patient.clone()))
}

pub fn save_outcome(env: &Env, patient: &Address, record: &OutcomeRecord) {
    let key = DataKey::Outcome(patient.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_outcome(env: &Env, patient: &Address) -> Option<OutcomeRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Outcome(patient.clone()))
}

pub fn add_provider_outcome(env: &Env, provider: &Address, patient: &Address) {
    let key = DataKey::ProviderOutcomes(provider.clone());
    let mut patients = load_provider_outcomes(env, provider);
    patients.push_back(patient.clone());
    env.storage().persistent().set(&key, &patients);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_provider_outcomes(env: &Env, provider: &Address) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::ProviderOutcomes(provider.clone()))
        .unwrap_or(Vec::new(env))
}
