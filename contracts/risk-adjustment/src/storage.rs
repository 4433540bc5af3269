use soroban_sdk::{Address, Env, String};

use crate::types::{DataKey, RiskFactorWeight, RiskScore};

/// TTL constants for persistent storage (in ledgers)
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

// -----------------------------------------------------------------------
// Admin
// -----------------------------------------------------------------------

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn load_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// -----------------------------------------------------------------------
// Factor weights
// -----------------------------------------------------------------------

pub fn save_weight(env: &Env, factor: &String, weight: &RiskFactorWeight) {
    let key = DataKey::Weight(factor.clone());
    env.storage().persistent().set(&key, weight);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_weight(env: &Env, factor: &String) -> Option<RiskFactorWeight> {
    env.storage()
        .persistent()
        .get(&DataKey::Weight(factor.clone()))
}

// -----------------------------------------------------------------------
// Patient scores
// -----------------------------------------------------------------------

pub fn save_score(env: &Env, patient: &Address, score: &RiskScore) {
    let key = DataKey::Score(patient.clone());
    env.storage().persistent().set(&key, score);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn load_score(env: &Env, patient: &Address) -> Option<RiskScore> {
    env.storage()
        .persistent()
        .get(&DataKey::Score(patient.clone()))
}
