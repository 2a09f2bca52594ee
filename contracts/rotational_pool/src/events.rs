use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the pool is initialized.
///
/// # Topics
/// * `Symbol` - "pool_initialized"
/// * `Address` - The pooled token
///
/// # Data
/// * `u32` - Member count (also the number of rounds)
/// * `u64` - Creation timestamp
pub fn emit_pool_initialized(e: &Env, token: &Address, member_count: u32, created_at: u64) {
    let topics = (Symbol::new(e, "pool_initialized"), token.clone());
    e.events().publish(topics, (member_count, created_at));
}

/// Emitted when a member pays the round deposit.
///
/// # Data
/// * `u32` - Round number
/// * `i128` - Amount pulled
/// * `i128` - Round total after this contribution
pub fn emit_contributed(e: &Env, member: &Address, round: u32, amount: i128, round_total: i128) {
    let topics = (Symbol::new(e, "contributed"), member.clone());
    e.events().publish(topics, (round, amount, round_total));
}

/// Emitted when a non-contributor's deposit is pulled as a penalty.
pub fn emit_penalty_collected(e: &Env, member: &Address, round: u32, amount: i128) {
    let topics = (Symbol::new(e, "penalty_collected"), member.clone());
    e.events().publish(topics, (round, amount));
}

/// Emitted when the penalty pull is rejected by the token. The round still
/// executes; `amount` is the resulting shortfall.
pub fn emit_penalty_failed(e: &Env, member: &Address, round: u32, amount: i128) {
    let topics = (Symbol::new(e, "penalty_failed"), member.clone());
    e.events().publish(topics, (round, amount));
}

/// Emitted when a round pays out.
///
/// # Topics
/// * `Symbol` - "round_executed"
/// * `Address` - The round recipient
///
/// # Data
/// * `u32` - Round number
/// * `i128` - Gross amount collected (contributions + penalties)
/// * `i128` - Net payout to the recipient
/// * `i128` - Treasury fee
/// * `i128` - Relayer fee
pub fn emit_round_executed(
    e: &Env,
    recipient: &Address,
    round: u32,
    collected: i128,
    net_payout: i128,
    treasury_fee: i128,
    relayer_fee: i128,
) {
    let topics = (Symbol::new(e, "round_executed"), recipient.clone());
    let data = (round, collected, net_payout, treasury_fee, relayer_fee);
    e.events().publish(topics, data);
}

/// Emitted after the last round; the pool accepts no further value movement.
pub fn emit_pool_completed(e: &Env, rounds: u32) {
    e.events()
        .publish((Symbol::new(e, "pool_completed"),), rounds);
}
