#![cfg(test)]

use crate::{TargetPool, TargetPoolClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Vec};

pub const DEFAULT_MINT: i128 = 1_000_000;
pub const TARGET: i128 = 1_000;
/// Deadline offset from the ledger time at setup.
pub const WINDOW: u64 = 30 * 86_400;

pub struct PoolSetup<'a> {
    pub client: TargetPoolClient<'a>,
    pub contract_id: Address,
    pub token: TokenClient<'a>,
    pub treasury: Address,
    pub members: Vec<Address>,
    pub deadline: u64,
}

pub fn register_pool(e: &Env) -> (TargetPoolClient<'_>, Address) {
    e.mock_all_auths();
    let contract_id = e.register(TargetPool, ());
    (TargetPoolClient::new(e, &contract_id), contract_id)
}

pub fn create_token(e: &Env) -> Address {
    e.register_stellar_asset_contract_v2(Address::generate(e))
        .address()
}

pub fn fund(e: &Env, token: &Address, member: &Address, spender: &Address) {
    StellarAssetClient::new(e, token).mint(member, &DEFAULT_MINT);
    let expiration = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, token).approve(member, spender, &DEFAULT_MINT, &expiration);
}

pub fn setup(e: &Env, member_count: u32, target: i128, treasury_fee_bps: u32) -> PoolSetup<'_> {
    let (client, contract_id) = register_pool(e);
    let token = create_token(e);

    let mut members = Vec::new(e);
    for _ in 0..member_count {
        let member = Address::generate(e);
        fund(e, &token, &member, &contract_id);
        members.push_back(member);
    }

    let treasury = Address::generate(e);
    let deadline = e.ledger().timestamp() + WINDOW;
    client.initialize(&token, &treasury, &members, &target, &deadline, &treasury_fee_bps);

    PoolSetup {
        client,
        contract_id,
        token: TokenClient::new(e, &token),
        treasury,
        members,
        deadline,
    }
}

/// Move the ledger clock strictly past the pool deadline.
pub fn pass_deadline(e: &Env, pool: &PoolSetup) {
    let deadline = pool.deadline;
    e.ledger().with_mut(|li| li.timestamp = deadline + 1);
}
