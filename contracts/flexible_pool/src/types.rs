use soroban_sdk::{contracttype, Address};

/// Immutable pool parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlexibleConfig {
    pub token: Address,
    pub treasury: Address,
    /// Smallest accepted deposit.
    pub minimum_deposit: i128,
    /// Charged on every withdrawal, paid to the treasury.
    pub withdrawal_fee_bps: u32,
    pub yield_enabled: bool,
    /// Recorded for every pool kind; yield is credited without a cut.
    pub treasury_fee_bps: u32,
    pub created_at: u64,
}

/// Running totals. The pool holds at least `total_balance`; anything above
/// it is undistributed yield.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Sum of member balances.
    pub total_balance: i128,
    pub total_deposited: i128,
    /// Gross amount withdrawn, fees included.
    pub total_withdrawn: i128,
    pub withdrawal_fees: i128,
    pub yield_distributed: i128,
    /// Rounding remainders of yield distributions, paid to the treasury.
    pub yield_dust: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberRecord {
    pub index: u32,
    pub balance: i128,
    pub total_deposited: i128,
    pub total_withdrawn: i128,
    pub yield_earned: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Members,
    State,
    Member(Address),
}
