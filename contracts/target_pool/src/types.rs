use soroban_sdk::{contracttype, Address};

/// Immutable pool parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TargetConfig {
    pub token: Address,
    pub treasury: Address,
    /// Goal in token base units; reaching it resolves the pool `Succeeded`.
    pub target_amount: i128,
    /// Last ledger timestamp at which contributions are accepted.
    pub deadline: u64,
    pub treasury_fee_bps: u32,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolStatus {
    Collecting,
    Succeeded,
    Failed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub status: PoolStatus,
    /// Sum of all contributions toward the goal.
    pub total_contributed: i128,
    /// Treasury cut taken once, at success.
    pub treasury_fee: i128,
    /// Paid out through `claim`, net of fees on success.
    pub total_claimed: i128,
    pub claims: u32,
    /// Zero while collecting.
    pub resolved_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberRecord {
    pub index: u32,
    /// Cumulative contribution; zeroed by a refund.
    pub contributed: i128,
    pub claimed: bool,
    pub claimed_amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Members,
    State,
    Member(Address),
}
