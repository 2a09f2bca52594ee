use soroban_sdk::{Address, Env, Symbol};

use crate::types::PoolStatus;

pub fn emit_pool_initialized(e: &Env, token: &Address, member_count: u32, created_at: u64) {
    let topics = (Symbol::new(e, "pool_initialized"), token.clone());
    e.events().publish(topics, (member_count, created_at));
}

/// # Data
/// * `i128` - Amount pulled
/// * `i128` - Member's cumulative contribution
/// * `i128` - Pool total
pub fn emit_contributed(e: &Env, member: &Address, amount: i128, member_total: i128, pool_total: i128) {
    let topics = (Symbol::new(e, "contributed"), member.clone());
    e.events().publish(topics, (amount, member_total, pool_total));
}

/// Emitted exactly once, when the pool leaves `Collecting`. The fee is zero
/// for a failed pool.
pub fn emit_pool_resolved(e: &Env, status: PoolStatus, pool_total: i128, treasury_fee: i128) {
    e.events().publish(
        (Symbol::new(e, "pool_resolved"),),
        (status, pool_total, treasury_fee),
    );
}

pub fn emit_claimed(e: &Env, member: &Address, amount: i128, status: PoolStatus) {
    let topics = (Symbol::new(e, "claimed"), member.clone());
    e.events().publish(topics, (amount, status));
}
