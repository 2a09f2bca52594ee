use savings_core::{
    Membership, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND,
    PERSISTENT_TTL_THRESHOLD,
};
use savings_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::types::{DataKey, MemberRecord, PoolState, FlexibleConfig};

// --- Config ---

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn get_config(e: &Env) -> Result<FlexibleConfig, ContractError> {
    let config = e
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)?;
    extend_instance_ttl(e);
    Ok(config)
}

pub fn set_config(e: &Env, config: &FlexibleConfig) {
    e.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(e);
}

// --- Roster ---

pub fn get_members(e: &Env) -> Result<Membership, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Members)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_members(e: &Env, roster: &Membership) {
    e.storage().instance().set(&DataKey::Members, roster);
}

// --- State ---

pub fn get_state(e: &Env) -> Result<PoolState, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_state(e: &Env, state: &PoolState) {
    e.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(e);
}

// --- Member records ---

pub fn get_member(e: &Env, member: &Address) -> Option<MemberRecord> {
    let key = DataKey::Member(member.clone());
    let result = e.storage().persistent().get(&key);
    if result.is_some() {
        extend_persistent_ttl(e, &key);
    }
    result
}

pub fn set_member(e: &Env, member: &Address, record: &MemberRecord) {
    let key = DataKey::Member(member.clone());
    e.storage().persistent().set(&key, record);
    extend_persistent_ttl(e, &key);
}

// --- TTL Management ---

fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
