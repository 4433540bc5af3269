#![no_std]

mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String};
pub use types::{DataKey, Error, ProviderRecord};

const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

#[contract]
pub struct ProviderVerificationContract;

#[contractimpl]
impl ProviderVerificationContract {
    pub fn __constructor(env: Env, admin: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::ProviderCount, &0u64);
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }

    /// Register the calling provider. The record starts unverified.
    pub fn register(
        env: Env,
        provider: Address,
        name: String,
        license_number: String,
        specialty: String,
    ) -> Result<Address, Error> {
        provider.require_auth();

        let key = DataKey::Provider(provider.clone());
        if env.storage().persistent().has(&key) {
            return Err(Error::ProviderExists);
        }

        if license_number.len() == 0 {
            return Err(Error::InvalidLicense);
        }

        let record = ProviderRecord {
            name,
            license_number,
            specialty,
            verified: false,
            registration_block: env.ledger().sequence(),
        };

        env.storage().persistent().set(&key, &record);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        let count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::ProviderCount)
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::ProviderCount, &(count + 1));
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);

        env.events()
            .publish((symbol_short!("prov_reg"),), provider.clone());

        Ok(provider)
    }

    /// Mark a registered provider as verified. Re-verifying is a no-op.
    pub fn verify(env: Env, caller: Address, provider: Address) -> Result<(), Error> {
        caller.require_auth();

        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::Unauthorized)?;
        if caller != admin {
            return Err(Error::Unauthorized);
        }

        let key = DataKey::Provider(provider.clone());
        let mut record: ProviderRecord = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::ProviderNotFound)?;

        if !record.verified {
            record.verified = true;
            env.storage().persistent().set(&key, &record);
        }
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        env.events()
            .publish((symbol_short!("prov_ver"),), provider);

        Ok(())
    }

    /// Stored registration for the provider, if any.
    pub fn get_provider(env: Env, provider: Address) -> Option<ProviderRecord> {
        env.storage()
            .persistent()
            .get(&DataKey::Provider(provider))
    }

    /// False for unknown providers.
    pub fn is_verified(env: Env, provider: Address) -> bool {
        Self::get_provider(env, provider)
            .map(|record| record.verified)
            .unwrap_or(false)
    }

    /// Number of providers ever registered.
    pub fn get_provider_count(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ProviderCount)
            .unwrap_or(0)
    }

    /// Admin fixed at deployment.
    pub fn get_admin(env: Env) -> Option<Address> {
        env.storage().instance().get(&DataKey::Admin)
    }
}
