use soroban_sdk::{symbol_short, Address, Env};

pub fn publish_model_created(env: &Env, model_id: u64) {
    env.events()
        .publish((symbol_short!("model_new"),), model_id);
}

pub fn publish_payment_calculated(env: &Env, provider: Address, period: u64, total_payment: i128) {
    env.events().publish(
        (symbol_short!("pay_calc"), provider),
        (period, total_payment),
    );
}

pub fn publish_payment_completed(env: &Env, provider: Address, period: u64) {
    env.events()
        .publish((symbol_short!("pay_done"), provider), period);
}
