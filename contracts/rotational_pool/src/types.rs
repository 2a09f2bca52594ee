use soroban_sdk::{contracttype, Address, Map};

// ─── Configuration ─────────────────────────────────────────────────────────

/// Fee rates fixed at creation, in basis points (100 bps = 1 %).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    /// Cut of each round's collection paid to the treasury.
    pub treasury_fee_bps: u32,
    /// Cut of each round's collection paid to whoever executes the round.
    pub relayer_fee_bps: u32,
}

/// Immutable pool parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RotationalConfig {
    /// Pooled asset (SEP-41 token contract).
    pub token: Address,
    /// Receives the treasury fee.
    pub treasury: Address,
    /// Fixed amount every member owes each round.
    pub deposit_amount: i128,
    /// Seconds a round stays open for contributions.
    pub round_duration: u64,
    pub fees: FeeConfig,
    /// Ledger timestamp at initialization.
    pub created_at: u64,
}

// ─── Pool state ────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolStatus {
    /// A round is open; `PoolState::current_round` points at it.
    Active,
    /// Every member received their payout.
    Completed,
}

/// Lifecycle cursor plus running totals, all in token base units.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    pub status: PoolStatus,
    /// Index of the open round (also the roster index of its recipient).
    pub current_round: u32,
    /// Everything ever pulled into the pool, contributions and penalties.
    pub total_received: i128,
    /// Net payouts sent to round recipients.
    pub total_paid_out: i128,
    pub treasury_fees: i128,
    pub relayer_fees: i128,
}

/// One contribution-and-payout cycle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoundInfo {
    pub round_number: u32,
    /// Roster member at index `round_number`.
    pub recipient: Address,
    pub deposit_amount: i128,
    pub start_time: u64,
    pub duration: u64,
    /// Members who contributed before execution.
    pub contributions: Map<Address, bool>,
    pub total_contributed: i128,
    /// Deposits pulled from non-contributors at execution.
    pub penalties_collected: i128,
    /// Deposits that could not be pulled at execution.
    pub shortfall: i128,
    pub net_payout: i128,
    pub treasury_fee: i128,
    pub relayer_fee: i128,
    pub executed: bool,
    pub executed_at: u64,
}

/// Per-member audit counters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberRecord {
    /// Roster position, fixed for the pool's lifetime.
    pub index: u32,
    /// Rounds contributed on time.
    pub contributions_made: u32,
    /// Rounds settled through a penalty pull.
    pub penalties_paid: u32,
    /// Rounds where the penalty pull failed.
    pub rounds_missed: u32,
    /// Contributions plus penalties pulled from this member.
    pub total_contributed: i128,
    pub payouts_received: u32,
    pub total_received: i128,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// `RotationalConfig`, instance storage.
    Config,
    /// `Membership` roster, instance storage.
    Members,
    /// `PoolState`, instance storage.
    State,
    /// Per-member `MemberRecord`, persistent storage.
    Member(Address),
    /// Per-round `RoundInfo`, persistent storage.
    Round(u32),
}
