//! Target Savings Pool Contract
//!
//! Members contribute any amount toward a shared goal until a deadline.
//! Reaching the goal resolves the pool `Succeeded`: the treasury fee is taken
//! once and every member can claim their contribution net of their share of
//! it. Missing the deadline resolves the pool `Failed` and every member can
//! claim a full refund.
//!
//! Resolution is lazy. There is no timer, so a pool past its deadline is
//! reported as `Failed` by `get_status` straight away but only records the
//! transition on the next `check_resolution` or `claim`.

#![no_std]

mod events;
mod storage;
mod types;

pub use savings_errors::ContractError;
pub use types::*;

use savings_core::{fees, ledger, math, validation, Membership};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

#[cfg(test)]
mod test_helpers;



// ─── Helpers ───────────────────────────────────────────────────────────────

/// Status the pool would have if resolved now.
fn effective_status(e: &Env, config: &TargetConfig, state: &PoolState) -> PoolStatus {
    if state.status != PoolStatus::Collecting {
        return state.status;
    }
    if state.total_contributed >= config.target_amount {
        PoolStatus::Succeeded
    } else if e.ledger().timestamp() > config.deadline {
        PoolStatus::Failed
    } else {
        PoolStatus::Collecting
    }
}

/// Sum of the per-member fee shares; taken from the pool once, at success.
fn success_fee(e: &Env, config: &TargetConfig, roster: &Membership) -> Result<i128, ContractError> {
    let mut fee = 0_i128;
    for member in roster.iter() {
        let record = load_member(e, &member)?;
        let (_, share) = fees::split(record.contributed, config.treasury_fee_bps)?;
        fee = math::add_i128(fee, share)?;
    }
    Ok(fee)
}

/// Apply a pending transition to `state`. On success the treasury fee is
/// paid here. Returns whether the status changed; the caller persists.
fn resolve(
    e: &Env,
    config: &TargetConfig,
    roster: &Membership,
    state: &mut PoolState,
) -> Result<bool, ContractError> {
    let status = effective_status(e, config, state);
    if status == state.status {
        return Ok(false);
    }

    state.status = status;
    state.resolved_at = e.ledger().timestamp();
    if status == PoolStatus::Succeeded {
        state.treasury_fee = success_fee(e, config, roster)?;
        ledger::pay(e, &config.token, &config.treasury, state.treasury_fee)?;
    }

    events::emit_pool_resolved(e, status, state.total_contributed, state.treasury_fee);
    Ok(true)
}

fn load_member(e: &Env, member: &Address) -> Result<MemberRecord, ContractError> {
    storage::get_member(e, member).ok_or(ContractError::NotMember)
}

/// What `record` may claim under `status`.
fn claim_amount(
    config: &TargetConfig,
    status: PoolStatus,
    record: &MemberRecord,
) -> Result<i128, ContractError> {
    match status {
        PoolStatus::Collecting => Ok(0),
        PoolStatus::Succeeded => Ok(fees::split(record.contributed, config.treasury_fee_bps)?.0),
        PoolStatus::Failed => Ok(record.contributed),
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct TargetPool;

#[contractimpl]
impl TargetPool {
    /// One-time initialization.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    /// * `InvalidMembers` - empty, duplicate, or oversized roster
    /// * `InvalidParameters` - `target_amount <= 0` or `deadline` not in the future
    /// * `InvalidFeeRate` - `treasury_fee_bps >= 10000`
    pub fn initialize(
        e: Env,
        token: Address,
        treasury: Address,
        members: Vec<Address>,
        target_amount: i128,
        deadline: u64,
        treasury_fee_bps: u32,
    ) -> Result<(), ContractError> {
        if storage::has_config(&e) {
            return Err(ContractError::AlreadyInitialized);
        }

        let roster =
            validation::validate_target(&e, members, target_amount, deadline, treasury_fee_bps)?;

        let created_at = e.ledger().timestamp();
        let config = TargetConfig {
            token,
            treasury,
            target_amount,
            deadline,
            treasury_fee_bps,
            created_at,
        };

        for (index, member) in roster.iter().enumerate() {
            let record = MemberRecord {
                index: index as u32,
                contributed: 0,
                claimed: false,
                claimed_amount: 0,
            };
            storage::set_member(&e, &member, &record);
        }

        storage::set_config(&e, &config);
        storage::set_members(&e, &roster);
        storage::set_state(
            &e,
            &PoolState {
                status: PoolStatus::Collecting,
                total_contributed: 0,
                treasury_fee: 0,
                total_claimed: 0,
                claims: 0,
                resolved_at: 0,
            },
        );

        events::emit_pool_initialized(&e, &config.token, roster.count(), created_at);
        Ok(())
    }

    /// Add `amount` to `member`'s contribution. Reaching the target resolves
    /// the pool `Succeeded` in the same call.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `NotMember` - `member` is not on the roster
    /// * `PoolNotCollecting` - the pool already resolved
    /// * `DeadlinePassed` - the deadline has passed; the pool is now effectively `Failed`
    /// * `TransferFailed` - the token rejected the pull or the fee payment
    pub fn contribute(e: Env, member: Address, amount: i128) -> Result<(), ContractError> {
        member.require_auth();

        let config = storage::get_config(&e)?;
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let mut state = storage::get_state(&e)?;
        let roster = storage::get_members(&e)?;
        roster.require_member(&member)?;

        if state.status != PoolStatus::Collecting {
            return Err(ContractError::PoolNotCollecting);
        }
        if e.ledger().timestamp() > config.deadline {
            return Err(ContractError::DeadlinePassed);
        }

        ledger::pull(&e, &config.token, &member, amount)?;

        let mut record = load_member(&e, &member)?;
        record.contributed = math::add_i128(record.contributed, amount)?;
        state.total_contributed = math::add_i128(state.total_contributed, amount)?;
        storage::set_member(&e, &member, &record);

        events::emit_contributed(&e, &member, amount, record.contributed, state.total_contributed);

        resolve(&e, &config, &roster, &mut state)?;
        storage::set_state(&e, &state);
        Ok(())
    }

    /// Record a pending resolution, if any, and return the resulting status.
    pub fn check_resolution(e: Env) -> Result<PoolStatus, ContractError> {
        let config = storage::get_config(&e)?;
        let mut state = storage::get_state(&e)?;
        let roster = storage::get_members(&e)?;

        if resolve(&e, &config, &roster, &mut state)? {
            storage::set_state(&e, &state);
        }
        Ok(state.status)
    }

    /// Pay `member` their share of a resolved pool and return the amount.
    ///
    /// `Succeeded`: the contribution minus its treasury fee share.
    /// `Failed`: the full contribution, which is then zeroed.
    ///
    /// # Errors
    /// * `NotMember` - `member` is not on the roster
    /// * `PoolNotResolved` - still collecting
    /// * `AlreadyClaimed` - `member` already claimed
    /// * `NothingToClaim` - `member` never contributed
    /// * `TransferFailed` - the token rejected the payment
    pub fn claim(e: Env, member: Address) -> Result<i128, ContractError> {
        member.require_auth();

        let config = storage::get_config(&e)?;
        let mut state = storage::get_state(&e)?;
        let roster = storage::get_members(&e)?;
        roster.require_member(&member)?;

        resolve(&e, &config, &roster, &mut state)?;
        if state.status == PoolStatus::Collecting {
            return Err(ContractError::PoolNotResolved);
        }

        let mut record = load_member(&e, &member)?;
        if record.claimed {
            return Err(ContractError::AlreadyClaimed);
        }
        if record.contributed == 0 {
            return Err(ContractError::NothingToClaim);
        }

        let amount = claim_amount(&config, state.status, &record)?;
        if state.status == PoolStatus::Failed {
            record.contributed = 0;
        }
        record.claimed = true;
        record.claimed_amount = amount;
        state.total_claimed = math::add_i128(state.total_claimed, amount)?;
        state.claims += 1;

        storage::set_member(&e, &member, &record);
        storage::set_state(&e, &state);

        ledger::pay(&e, &config.token, &member, amount)?;

        events::emit_claimed(&e, &member, amount, state.status);
        Ok(amount)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_config(e: Env) -> Result<TargetConfig, ContractError> {
        storage::get_config(&e)
    }

    /// Stored state; `status` may lag behind `get_status` until resolved.
    pub fn get_state(e: Env) -> Result<PoolState, ContractError> {
        storage::get_state(&e)
    }

    /// Status at the current ledger time. Read-only.
    pub fn get_status(e: Env) -> Result<PoolStatus, ContractError> {
        let config = storage::get_config(&e)?;
        let state = storage::get_state(&e)?;
        Ok(effective_status(&e, &config, &state))
    }

    pub fn get_members(e: Env) -> Result<Vec<Address>, ContractError> {
        Ok(storage::get_members(&e)?.members)
    }

    pub fn get_member(e: Env, member: Address) -> Result<MemberRecord, ContractError> {
        storage::get_config(&e)?;
        load_member(&e, &member)
    }

    /// Amount `member` would receive from `claim` right now; zero while
    /// collecting or after claiming.
    pub fn get_claimable(e: Env, member: Address) -> Result<i128, ContractError> {
        let config = storage::get_config(&e)?;
        let state = storage::get_state(&e)?;
        let record = load_member(&e, &member)?;
        if record.claimed {
            return Ok(0);
        }
        claim_amount(&config, effective_status(&e, &config, &state), &record)
    }
}
