#![cfg(test)]

use super::*;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec, Address, Env, String, Vec};

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

fn setup(env: &Env) -> (RiskAdjustmentContractClient<'static>, Address) {
    env.mock_all_auths();
    let admin = Address::generate(env);
    let contract_id = env.register(RiskAdjustmentContract, (admin.clone(),));
    (RiskAdjustmentContractClient::new(env, &contract_id), admin)
}

fn factor(env: &Env, name: &str) -> String {
    String::from_str(env, name)
}

fn set_chronic_weights(env: &Env, client: &RiskAdjustmentContractClient, admin: &Address) {
    let category = String::from_str(env, "chronic-condition");
    client.set_weight(admin, &factor(env, "diabetes"), &15, &category);
    client.set_weight(admin, &factor(env, "hypertension"), &10, &category);
}

// -----------------------------------------------------------------------
// set_weight
// -----------------------------------------------------------------------

#[test]
fn test_set_weight_by_admin() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    set_chronic_weights(&env, &client, &admin);

    let entry = client.get_weight(&factor(&env, "diabetes")).unwrap();
    assert_eq!(entry.weight, 15);
    assert_eq!(entry.category, String::from_str(&env, "chronic-condition"));
}

#[test]
fn test_set_weight_overwrites() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    set_chronic_weights(&env, &client, &admin);

    client.set_weight(
        &admin,
        &factor(&env, "diabetes"),
        &30,
        &String::from_str(&env, "metabolic"),
    );
    let entry = client.get_weight(&factor(&env, "diabetes")).unwrap();
    assert_eq!(entry.weight, 30);
    assert_eq!(entry.category, String::from_str(&env, "metabolic"));
}

#[test]
fn test_set_weight_by_non_admin_fails() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let stranger = Address::generate(&env);

    let result = client.try_set_weight(
        &stranger,
        &factor(&env, "diabetes"),
        &15,
        &String::from_str(&env, "chronic-condition"),
    );
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert!(client.get_weight(&factor(&env, "diabetes")).is_none());
}

#[test]
fn test_set_weight_out_of_range_fails() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    let category = String::from_str(&env, "chronic-condition");

    let negative = client.try_set_weight(&admin, &factor(&env, "diabetes"), &-1, &category);
    assert_eq!(negative, Err(Ok(Error::InvalidRiskFactor)));

    let too_large = client.try_set_weight(
        &admin,
        &factor(&env, "diabetes"),
        &(MAX_FACTOR_WEIGHT + 1),
        &category,
    );
    assert_eq!(too_large, Err(Ok(Error::InvalidRiskFactor)));

    let unnamed = client.try_set_weight(&admin, &factor(&env, ""), &5, &category);
    assert_eq!(unnamed, Err(Ok(Error::InvalidRiskFactor)));

    assert!(client.get_weight(&factor(&env, "diabetes")).is_none());

    // Bounds themselves are accepted
    client.set_weight(&admin, &factor(&env, "frailty"), &0, &category);
    client.set_weight(&admin, &factor(&env, "esrd"), &MAX_FACTOR_WEIGHT, &category);
    assert_eq!(client.get_weight(&factor(&env, "esrd")).unwrap().weight, 1_000);
}

// -----------------------------------------------------------------------
// calculate_score
// -----------------------------------------------------------------------

#[test]
fn test_calculate_score_sums_weights() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    set_chronic_weights(&env, &client, &admin);
    env.ledger().set_sequence_number(1300);

    let patient = Address::generate(&env);
    let factors = vec![&env, factor(&env, "diabetes"), factor(&env, "hypertension")];
    assert_eq!(client.calculate_score(&patient, &factors), 125);

    let score = client.get_score(&patient).unwrap();
    assert_eq!(score.base_risk_score, 100);
    assert_eq!(score.adjusted_risk_score, 125);
    assert_eq!(score.risk_factors, factors);
    assert_eq!(score.calculation_block, 1300);
}

#[test]
fn test_calculate_score_empty_factors() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    set_chronic_weights(&env, &client, &admin);

    let patient = Address::generate(&env);
    assert_eq!(client.calculate_score(&patient, &Vec::new(&env)), BASE_RISK_SCORE);
    assert_eq!(client.get_multiplier(&patient), NEUTRAL_MULTIPLIER);
}

#[test]
fn test_calculate_score_unknown_factor_contributes_nothing() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    set_chronic_weights(&env, &client, &admin);

    let patient = Address::generate(&env);
    let factors = vec![
        &env,
        factor(&env, "diabetes"),
        factor(&env, "hypertension"),
        factor(&env, "obesity"),
    ];
    assert_eq!(client.calculate_score(&patient, &factors), 125);
    assert_eq!(client.get_score(&patient).unwrap().risk_factors.len(), 3);
}

#[test]
fn test_calculate_score_counts_duplicates_once() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    set_chronic_weights(&env, &client, &admin);

    let patient = Address::generate(&env);
    let factors = vec![
        &env,
        factor(&env, "hypertension"),
        factor(&env, "diabetes"),
        factor(&env, "hypertension"),
    ];
    assert_eq!(client.calculate_score(&patient, &factors), 125);

    let stored = client.get_score(&patient).unwrap().risk_factors;
    assert_eq!(
        stored,
        vec![&env, factor(&env, "hypertension"), factor(&env, "diabetes")]
    );
}

#[test]
fn test_recalculation_overwrites() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    set_chronic_weights(&env, &client, &admin);
    let patient = Address::generate(&env);

    env.ledger().set_sequence_number(1300);
    client.calculate_score(&patient, &vec![&env, factor(&env, "diabetes")]);

    env.ledger().set_sequence_number(1350);
    assert_eq!(
        client.calculate_score(&patient, &vec![&env, factor(&env, "hypertension")]),
        110
    );

    let score = client.get_score(&patient).unwrap();
    assert_eq!(score.adjusted_risk_score, 110);
    assert_eq!(score.risk_factors, vec![&env, factor(&env, "hypertension")]);
    assert_eq!(score.calculation_block, 1350);
}

#[test]
fn test_calculate_score_too_many_factors_fails() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let patient = Address::generate(&env);

    let mut factors = Vec::new(&env);
    for _ in 0..=MAX_RISK_FACTORS {
        factors.push_back(factor(&env, "diabetes"));
    }
    let result = client.try_calculate_score(&patient, &factors);
    assert_eq!(result, Err(Ok(Error::InvalidRiskFactor)));
    assert!(client.get_score(&patient).is_none());
}

#[test]
fn test_calculate_score_requires_patient_auth() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let contract_id = env.register(RiskAdjustmentContract, (admin,));
    let client = RiskAdjustmentContractClient::new(&env, &contract_id);
    let patient = Address::generate(&env);

    let result = client.try_calculate_score(&patient, &Vec::new(&env));
    assert!(result.is_err());
    assert!(client.get_score(&patient).is_none());
}

// -----------------------------------------------------------------------
// get_multiplier
// -----------------------------------------------------------------------

#[test]
fn test_multiplier_from_score() {
    let env = Env::default();
    let (client, admin) = setup(&env);
    set_chronic_weights(&env, &client, &admin);

    let patient = Address::generate(&env);
    client.calculate_score(
        &patient,
        &vec![&env, factor(&env, "diabetes"), factor(&env, "hypertension")],
    );
    assert_eq!(client.get_multiplier(&patient), 125);
}

#[test]
fn test_multiplier_defaults_for_unknown_patient() {
    let env = Env::default();
    let (client, _) = setup(&env);
    let patient = Address::generate(&env);

    assert!(client.get_score(&patient).is_none());
    assert_eq!(client.get_multiplier(&patient), 100);
}

#[test]
fn test_multiplier_arithmetic() {
    assert_eq!(risk_multiplier(100, 100), Some(100));
    assert_eq!(risk_multiplier(100, 125), Some(125));
    // Zero base never divides
    assert_eq!(risk_multiplier(0, 125), Some(100));
    // Truncates toward zero
    assert_eq!(risk_multiplier(3, 4), Some(133));
    assert_eq!(risk_multiplier(100, u32::MAX), Some(u32::MAX));
    assert_eq!(risk_multiplier(1, u32::MAX), None);
}

#[test]
fn test_get_weight_unknown_factor() {
    let env = Env::default();
    let (client, admin) = setup(&env);

    assert!(client.get_weight(&factor(&env, "asthma")).is_none());
    assert_eq!(client.get_admin(), Some(admin));
}
