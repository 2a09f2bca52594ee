#![no_std]

//! # Pool Registry Contract
//!
//! Deploys savings pool contracts from admin-configured wasm hashes and keeps
//! an index of every pool it created.
//!
//! ## Features
//! - One wasm hash per pool kind, set by the admin
//! - `create_*` validates parameters, deploys, and initializes a pool in one call
//! - Lookup by sequential id and listing by kind
//!
//! Pools are independent contracts; the registry only records their addresses.

use savings_core::validation;
use savings_errors::ContractError;
use soroban_sdk::{
    contract, contractimpl, contracttype, vec, Address, BytesN, Env, IntoVal, Symbol, Val, Vec,
};

const INSTANCE_TTL_THRESHOLD: u32 = savings_core::INSTANCE_TTL_THRESHOLD;
const INSTANCE_TTL_EXTEND: u32 = savings_core::INSTANCE_TTL_EXTEND;
const PERSISTENT_TTL_THRESHOLD: u32 = savings_core::PERSISTENT_TTL_THRESHOLD;
const PERSISTENT_TTL_EXTEND: u32 = savings_core::PERSISTENT_TTL_EXTEND;

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolKind {
    Rotational,
    Target,
    Flexible,
}

/// A pool created through the registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolEntry {
    pub id: u32,
    pub kind: PoolKind,
    pub address: Address,
    pub creator: Address,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone)]
enum DataKey {
    Admin,
    /// Wasm hash deployed for a kind.
    PoolWasm(PoolKind),
    PoolCount,
    Pool(u32),
    /// Ids of every pool of a kind, in creation order.
    PoolsByKind(PoolKind),
}

// ─── Storage helpers ───────────────────────────────────────────────────────

fn load_admin(e: &Env) -> Result<Address, ContractError> {
    let admin = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)?;
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
    Ok(admin)
}

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    let admin = load_admin(e)?;
    if *caller != admin {
        return Err(ContractError::NotAdmin);
    }
    caller.require_auth();
    Ok(())
}

fn pool_wasm(e: &Env, kind: PoolKind) -> Result<BytesN<32>, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::PoolWasm(kind))
        .ok_or(ContractError::PoolWasmNotSet)
}

fn kind_ids(e: &Env, kind: PoolKind) -> Vec<u32> {
    let key = DataKey::PoolsByKind(kind);
    match e.storage().persistent().get(&key) {
        Some(ids) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
            ids
        }
        None => Vec::new(e),
    }
}

fn set_persistent<V: IntoVal<Env, Val>>(e: &Env, key: &DataKey, value: &V) {
    e.storage().persistent().set(key, value);
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

fn next_pool_id(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::PoolCount).unwrap_or(0)
}

/// Deploy a pool of `kind` and call its `initialize` with `init_args`.
/// Parameters must already be validated.
fn deploy_pool(e: &Env, kind: PoolKind, init_args: Vec<Val>) -> Result<Address, ContractError> {
    let wasm_hash = pool_wasm(e, kind)?;

    let mut salt = [0u8; 32];
    salt[28..].copy_from_slice(&next_pool_id(e).to_be_bytes());

    let address = e
        .deployer()
        .with_current_contract(BytesN::from_array(e, &salt))
        .deploy_v2(wasm_hash, ());
    e.invoke_contract::<()>(&address, &Symbol::new(e, "initialize"), init_args);
    Ok(address)
}

/// Index a deployed pool under the next id and return that id.
fn record_pool(
    e: &Env,
    creator: &Address,
    kind: PoolKind,
    address: &Address,
) -> Result<u32, ContractError> {
    let id = next_pool_id(e);
    let entry = PoolEntry {
        id,
        kind,
        address: address.clone(),
        creator: creator.clone(),
        created_at: e.ledger().timestamp(),
    };
    set_persistent(e, &DataKey::Pool(id), &entry);

    let mut ids = kind_ids(e, kind);
    ids.push_back(id);
    set_persistent(e, &DataKey::PoolsByKind(kind), &ids);

    let next = id.checked_add(1).ok_or(ContractError::Overflow)?;
    e.storage().instance().set(&DataKey::PoolCount, &next);

    e.events().publish(
        (Symbol::new(e, "pool_created"), creator.clone()),
        (id, kind, address.clone()),
    );
    Ok(id)
}

/// Deploy, initialize, and index a pool.
fn create_pool(
    e: &Env,
    creator: &Address,
    kind: PoolKind,
    init_args: Vec<Val>,
) -> Result<Address, ContractError> {
    let address = deploy_pool(e, kind, init_args)?;
    record_pool(e, creator, kind, &address)?;
    Ok(address)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct PoolRegistry;

#[contractimpl]
impl PoolRegistry {
    /// Initialize the registry with an admin address.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    pub fn initialize(e: Env, admin: Address) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::PoolCount, &0_u32);
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);

        e.events()
            .publish((Symbol::new(&e, "registry_initialized"),), admin);
        Ok(())
    }

    /// Set the wasm hash deployed for `kind`. Existing pools are unaffected.
    ///
    /// # Errors
    /// * `NotInitialized` - registry not initialized
    /// * `NotAdmin` - `admin` is not the registry admin
    pub fn set_pool_wasm(
        e: Env,
        admin: Address,
        kind: PoolKind,
        wasm_hash: BytesN<32>,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        e.storage()
            .instance()
            .set(&DataKey::PoolWasm(kind), &wasm_hash);
        Ok(())
    }

    /// Deploy and initialize a rotational pool.
    ///
    /// # Errors
    /// * `InvalidParameters` - any parameter the pool would reject
    /// * `PoolWasmNotSet` - no wasm hash configured for rotational pools
    #[allow(clippy::too_many_arguments)]
    pub fn create_rotational(
        e: Env,
        creator: Address,
        token: Address,
        treasury: Address,
        members: Vec<Address>,
        deposit_amount: i128,
        round_duration: u64,
        treasury_fee_bps: u32,
        relayer_fee_bps: u32,
    ) -> Result<Address, ContractError> {
        creator.require_auth();
        load_admin(&e)?;

        validation::validate_rotational(
            &e,
            members.clone(),
            deposit_amount,
            round_duration,
            treasury_fee_bps,
            relayer_fee_bps,
        )
        .map_err(|_| ContractError::InvalidParameters)?;

        let args: Vec<Val> = vec![
            &e,
            token.into_val(&e),
            treasury.into_val(&e),
            members.into_val(&e),
            deposit_amount.into_val(&e),
            round_duration.into_val(&e),
            treasury_fee_bps.into_val(&e),
            relayer_fee_bps.into_val(&e),
        ];
        create_pool(&e, &creator, PoolKind::Rotational, args)
    }

    /// Deploy and initialize a target pool.
    ///
    /// # Errors
    /// * `InvalidParameters` - any parameter the pool would reject
    /// * `PoolWasmNotSet` - no wasm hash configured for target pools
    pub fn create_target(
        e: Env,
        creator: Address,
        token: Address,
        treasury: Address,
        members: Vec<Address>,
        target_amount: i128,
        deadline: u64,
        treasury_fee_bps: u32,
    ) -> Result<Address, ContractError> {
        creator.require_auth();
        load_admin(&e)?;

        validation::validate_target(&e, members.clone(), target_amount, deadline, treasury_fee_bps)
            .map_err(|_| ContractError::InvalidParameters)?;

        let args: Vec<Val> = vec![
            &e,
            token.into_val(&e),
            treasury.into_val(&e),
            members.into_val(&e),
            target_amount.into_val(&e),
            deadline.into_val(&e),
            treasury_fee_bps.into_val(&e),
        ];
        create_pool(&e, &creator, PoolKind::Target, args)
    }

    /// Deploy and initialize a flexible pool.
    ///
    /// # Errors
    /// * `InvalidParameters` - any parameter the pool would reject
    /// * `PoolWasmNotSet` - no wasm hash configured for flexible pools
    #[allow(clippy::too_many_arguments)]
    pub fn create_flexible(
        e: Env,
        creator: Address,
        token: Address,
        treasury: Address,
        members: Vec<Address>,
        minimum_deposit: i128,
        withdrawal_fee_bps: u32,
        yield_enabled: bool,
        treasury_fee_bps: u32,
    ) -> Result<Address, ContractError> {
        creator.require_auth();
        load_admin(&e)?;

        validation::validate_flexible(
            &e,
            members.clone(),
            minimum_deposit,
            withdrawal_fee_bps,
            treasury_fee_bps,
        )
        .map_err(|_| ContractError::InvalidParameters)?;

        let args: Vec<Val> = vec![
            &e,
            token.into_val(&e),
            treasury.into_val(&e),
            members.into_val(&e),
            minimum_deposit.into_val(&e),
            withdrawal_fee_bps.into_val(&e),
            yield_enabled.into_val(&e),
            treasury_fee_bps.into_val(&e),
        ];
        create_pool(&e, &creator, PoolKind::Flexible, args)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        load_admin(&e)
    }

    pub fn get_pool_wasm(e: Env, kind: PoolKind) -> Result<BytesN<32>, ContractError> {
        load_admin(&e)?;
        pool_wasm(&e, kind)
    }

    /// # Errors
    /// * `PoolNotFound` - no pool with this id
    pub fn get_pool(e: Env, id: u32) -> Result<PoolEntry, ContractError> {
        let key = DataKey::Pool(id);
        let entry = e
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::PoolNotFound)?;
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
        Ok(entry)
    }

    /// Number of pools created; ids run from 0 to `count - 1`.
    pub fn get_pool_count(e: Env) -> Result<u32, ContractError> {
        load_admin(&e)?;
        Ok(next_pool_id(&e))
    }

    pub fn get_pools_by_kind(e: Env, kind: PoolKind) -> Result<Vec<PoolEntry>, ContractError> {
        let mut entries = Vec::new(&e);
        for id in kind_ids(&e, kind).iter() {
            entries.push_back(Self::get_pool(e.clone(), id)?);
        }
        Ok(entries)
    }
}
