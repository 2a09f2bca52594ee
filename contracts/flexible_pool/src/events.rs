use soroban_sdk::{Address, Env, Symbol};

pub fn emit_pool_initialized(e: &Env, token: &Address, member_count: u32, created_at: u64) {
    let topics = (Symbol::new(e, "pool_initialized"), token.clone());
    e.events().publish(topics, (member_count, created_at));
}

/// Data: (amount, member balance, pool total balance).
pub fn emit_deposited(e: &Env, member: &Address, amount: i128, balance: i128, pool_total: i128) {
    let topics = (Symbol::new(e, "deposited"), member.clone());
    e.events().publish(topics, (amount, balance, pool_total));
}

/// Data: (gross amount, net paid to member, fee, remaining balance).
pub fn emit_withdrawn(e: &Env, member: &Address, amount: i128, net: i128, fee: i128, balance: i128) {
    let topics = (Symbol::new(e, "withdrawn"), member.clone());
    e.events().publish(topics, (amount, net, fee, balance));
}

/// Emitted by `distribute_yield`.
///
/// # Data
/// * `i128` - Gross yield
/// * `i128` - Credited to member balances
/// * `i128` - Rounding dust paid to the treasury
pub fn emit_yield_distributed(
    e: &Env,
    caller: &Address,
    total_yield: i128,
    distributed: i128,
    dust: i128,
) {
    let topics = (Symbol::new(e, "yield_distributed"), caller.clone());
    e.events().publish(topics, (total_yield, distributed, dust));
}
