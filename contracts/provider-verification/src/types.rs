use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 100,
    ProviderExists = 101,
    ProviderNotFound = 102,
    InvalidLicense = 103,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRecord {
    pub name: String,
    pub license_number: String,
    pub specialty: String,
    pub verified: bool,
    pub registration_block: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    ProviderCount,
    Provider(Address), // provider -> ProviderRecord
}
