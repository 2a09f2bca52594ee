//! Rotational Savings Pool Contract
//!
//! A fixed roster pays a fixed deposit every round; each round's collection,
//! minus treasury and relayer fees, goes to one member in roster order. After
//! every member has been paid once the pool is `Completed`.
//!
//! ## Key design decisions
//!
//! - **One pool per contract instance**: the instance is the unit of
//!   serialization; parameters are immutable after `initialize`.
//! - **Round cursor**: `PoolState::current_round` indexes both the open round
//!   and its recipient in the roster. No skipping, no repeats.
//! - **Best-effort penalties**: at execution, deposits missing from
//!   non-contributors are pulled with `ledger::try_pull`; a rejected pull is
//!   recorded as a shortfall and the round still pays out. Every other token
//!   movement aborts the call on failure.
//! - **Late contributions are refused**: once the round duration has
//!   elapsed, `contribute` fails with `RoundClosed` and the member is handled
//!   by the penalty pull instead.

#![no_std]

mod events;
mod storage;
mod types;

pub use savings_errors::ContractError;
pub use types::*;

use savings_core::{fees, ledger, math, validation, Membership, TransferOutcome};
use soroban_sdk::{contract, contractimpl, Address, Env, Map, Vec};





// ─── Helpers ───────────────────────────────────────────────────────────────

fn open_round(e: &Env, config: &RotationalConfig, round_number: u32, recipient: Address) -> RoundInfo {
    RoundInfo {
        round_number,
        recipient,
        deposit_amount: config.deposit_amount,
        start_time: e.ledger().timestamp(),
        duration: config.round_duration,
        contributions: Map::new(e),
        total_contributed: 0,
        penalties_collected: 0,
        shortfall: 0,
        net_payout: 0,
        treasury_fee: 0,
        relayer_fee: 0,
        executed: false,
        executed_at: 0,
    }
}

fn round_deadline(round: &RoundInfo) -> Result<u64, ContractError> {
    math::add_u64(round.start_time, round.duration)
}

fn load_current_round(e: &Env, state: &PoolState) -> Result<RoundInfo, ContractError> {
    storage::get_round(e, state.current_round).ok_or(ContractError::RoundNotFound)
}

fn load_member(e: &Env, member: &Address) -> Result<MemberRecord, ContractError> {
    storage::get_member(e, member).ok_or(ContractError::NotMember)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct RotationalPool;

#[contractimpl]
impl RotationalPool {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. Opens round 0 with the first roster member
    /// as recipient.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    /// * `InvalidMembers` - empty, duplicate, or oversized roster
    /// * `InvalidParameters` - `deposit_amount <= 0` or `round_duration == 0`
    /// * `InvalidFeeRate` - either rate, or their sum, is >= 10000 bps
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        e: Env,
        token: Address,
        treasury: Address,
        members: Vec<Address>,
        deposit_amount: i128,
        round_duration: u64,
        treasury_fee_bps: u32,
        relayer_fee_bps: u32,
    ) -> Result<(), ContractError> {
        if storage::has_config(&e) {
            return Err(ContractError::AlreadyInitialized);
        }

        let roster = validation::validate_rotational(
            &e,
            members,
            deposit_amount,
            round_duration,
            treasury_fee_bps,
            relayer_fee_bps,
        )?;

        let created_at = e.ledger().timestamp();
        let config = RotationalConfig {
            token,
            treasury,
            deposit_amount,
            round_duration,
            fees: FeeConfig {
                treasury_fee_bps,
                relayer_fee_bps,
            },
            created_at,
        };

        for (index, member) in roster.iter().enumerate() {
            let record = MemberRecord {
                index: index as u32,
                contributions_made: 0,
                penalties_paid: 0,
                rounds_missed: 0,
                total_contributed: 0,
                payouts_received: 0,
                total_received: 0,
            };
            storage::set_member(&e, &member, &record);
        }

        let first_recipient = roster.get(0).ok_or(ContractError::InvalidMembers)?;
        storage::set_round(&e, &open_round(&e, &config, 0, first_recipient));

        storage::set_config(&e, &config);
        storage::set_members(&e, &roster);
        storage::set_state(
            &e,
            &PoolState {
                status: PoolStatus::Active,
                current_round: 0,
                total_received: 0,
                total_paid_out: 0,
                treasury_fees: 0,
                relayer_fees: 0,
            },
        );

        events::emit_pool_initialized(&e, &config.token, roster.count(), created_at);
        Ok(())
    }

    // ── Rounds ─────────────────────────────────────────────────────────────

    /// Pay this round's deposit. The pool pulls `deposit_amount` from
    /// `member`, who must have approved the pool as spender.
    ///
    /// # Errors
    /// * `PoolCompleted` - every payout has been made
    /// * `NotMember` - `member` is not on the roster
    /// * `AlreadyContributed` - `member` already paid into the open round
    /// * `RoundClosed` - the round duration has elapsed
    /// * `TransferFailed` - the token rejected the pull
    pub fn contribute(e: Env, member: Address) -> Result<(), ContractError> {
        member.require_auth();

        let config = storage::get_config(&e)?;
        let mut state = storage::get_state(&e)?;
        if state.status == PoolStatus::Completed {
            return Err(ContractError::PoolCompleted);
        }

        let roster = storage::get_members(&e)?;
        roster.require_member(&member)?;

        let mut round = load_current_round(&e, &state)?;
        if round.contributions.contains_key(member.clone()) {
            return Err(ContractError::AlreadyContributed);
        }
        if e.ledger().timestamp() >= round_deadline(&round)? {
            return Err(ContractError::RoundClosed);
        }

        ledger::pull(&e, &config.token, &member, config.deposit_amount)?;

        let mut record = load_member(&e, &member)?;
        record.contributions_made += 1;
        record.total_contributed = math::add_i128(record.total_contributed, config.deposit_amount)?;

        round.contributions.set(member.clone(), true);
        round.total_contributed = math::add_i128(round.total_contributed, config.deposit_amount)?;
        state.total_received = math::add_i128(state.total_received, config.deposit_amount)?;

        storage::set_member(&e, &member, &record);
        storage::set_round(&e, &round);
        storage::set_state(&e, &state);

        events::emit_contributed(
            &e,
            &member,
            round.round_number,
            config.deposit_amount,
            round.total_contributed,
        );
        Ok(())
    }

    /// Close the open round and pay its recipient.
    ///
    /// Callable by anyone once the round duration has elapsed, or earlier
    /// once every member has contributed. `caller` receives the relayer fee.
    ///
    /// Members who did not contribute are charged the deposit as a penalty.
    /// A rejected penalty pull does not abort the round: it is recorded as a
    /// shortfall (and a `penalty_failed` event) and the payout shrinks by
    /// that amount.
    ///
    /// Returns the executed round record.
    ///
    /// # Errors
    /// * `PoolCompleted` - every payout has been made
    /// * `RoundNotElapsed` - round still open and contributions incomplete
    /// * `TransferFailed` - a payout or fee transfer was rejected
    pub fn execute_round(e: Env, caller: Address) -> Result<RoundInfo, ContractError> {
        caller.require_auth();

        let config = storage::get_config(&e)?;
        let mut state = storage::get_state(&e)?;
        if state.status == PoolStatus::Completed {
            return Err(ContractError::PoolCompleted);
        }

        let roster = storage::get_members(&e)?;
        let mut round = load_current_round(&e, &state)?;
        let now = e.ledger().timestamp();

        let all_contributed = round.contributions.len() == roster.count();
        if !all_contributed && now < round_deadline(&round)? {
            return Err(ContractError::RoundNotElapsed);
        }

        // Penalty pass over non-contributors, in roster order.
        for member in roster.iter() {
            if round.contributions.contains_key(member.clone()) {
                continue;
            }
            let mut record = load_member(&e, &member)?;
            match ledger::try_pull(&e, &config.token, &member, config.deposit_amount) {
                TransferOutcome::Completed => {
                    record.penalties_paid += 1;
                    record.total_contributed =
                        math::add_i128(record.total_contributed, config.deposit_amount)?;
                    round.penalties_collected =
                        math::add_i128(round.penalties_collected, config.deposit_amount)?;
                    events::emit_penalty_collected(
                        &e,
                        &member,
                        round.round_number,
                        config.deposit_amount,
                    );
                }
                TransferOutcome::Failed => {
                    record.rounds_missed += 1;
                    round.shortfall = math::add_i128(round.shortfall, config.deposit_amount)?;
                    events::emit_penalty_failed(
                        &e,
                        &member,
                        round.round_number,
                        config.deposit_amount,
                    );
                }
            }
            storage::set_member(&e, &member, &record);
        }

        let collected = math::add_i128(round.total_contributed, round.penalties_collected)?;
        let (net_payout, [treasury_fee, relayer_fee]) = fees::split_many(
            collected,
            [config.fees.treasury_fee_bps, config.fees.relayer_fee_bps],
        )?;

        let recipient = round.recipient.clone();
        let mut recipient_record = load_member(&e, &recipient)?;
        recipient_record.payouts_received += 1;
        recipient_record.total_received =
            math::add_i128(recipient_record.total_received, net_payout)?;
        storage::set_member(&e, &recipient, &recipient_record);

        round.net_payout = net_payout;
        round.treasury_fee = treasury_fee;
        round.relayer_fee = relayer_fee;
        round.executed = true;
        round.executed_at = now;
        storage::set_round(&e, &round);

        state.total_received = math::add_i128(state.total_received, round.penalties_collected)?;
        state.total_paid_out = math::add_i128(state.total_paid_out, net_payout)?;
        state.treasury_fees = math::add_i128(state.treasury_fees, treasury_fee)?;
        state.relayer_fees = math::add_i128(state.relayer_fees, relayer_fee)?;

        let next_round = round.round_number + 1;
        match roster.get(next_round) {
            Some(next_recipient) => {
                state.current_round = next_round;
                storage::set_round(&e, &open_round(&e, &config, next_round, next_recipient));
            }
            None => {
                state.status = PoolStatus::Completed;
            }
        }
        storage::set_state(&e, &state);

        ledger::pay(&e, &config.token, &recipient, net_payout)?;
        ledger::pay(&e, &config.token, &config.treasury, treasury_fee)?;
        ledger::pay(&e, &config.token, &caller, relayer_fee)?;

        events::emit_round_executed(
            &e,
            &recipient,
            round.round_number,
            collected,
            net_payout,
            treasury_fee,
            relayer_fee,
        );
        if state.status == PoolStatus::Completed {
            events::emit_pool_completed(&e, roster.count());
        }

        Ok(round)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_config(e: Env) -> Result<RotationalConfig, ContractError> {
        storage::get_config(&e)
    }

    pub fn get_state(e: Env) -> Result<PoolState, ContractError> {
        storage::get_state(&e)
    }

    /// Roster in rotation order.
    pub fn get_members(e: Env) -> Result<Vec<Address>, ContractError> {
        Ok(storage::get_members(&e)?.members)
    }

    pub fn get_member(e: Env, member: Address) -> Result<MemberRecord, ContractError> {
        storage::get_config(&e)?;
        load_member(&e, &member)
    }

    /// Round record by number; executed rounds are immutable history.
    pub fn get_round(e: Env, round: u32) -> Result<RoundInfo, ContractError> {
        storage::get_config(&e)?;
        storage::get_round(&e, round).ok_or(ContractError::RoundNotFound)
    }

    /// The open round, or the last executed one once the pool is completed.
    pub fn get_current_round(e: Env) -> Result<RoundInfo, ContractError> {
        let state = storage::get_state(&e)?;
        load_current_round(&e, &state)
    }

    /// Whether `member` contributed to the open round.
    pub fn has_contributed(e: Env, member: Address) -> Result<bool, ContractError> {
        let state = storage::get_state(&e)?;
        let round = load_current_round(&e, &state)?;
        Ok(round.contributions.contains_key(member))
    }

    /// Recipient of the open round.
    ///
    /// # Errors
    /// * `PoolCompleted` - no round is open
    pub fn get_current_recipient(e: Env) -> Result<Address, ContractError> {
        let state = storage::get_state(&e)?;
        if state.status == PoolStatus::Completed {
            return Err(ContractError::PoolCompleted);
        }
        Ok(load_current_round(&e, &state)?.recipient)
    }

    /// Position of `member` in the rotation.
    pub fn get_member_index(e: Env, member: Address) -> Result<u32, ContractError> {
        let roster: Membership = storage::get_members(&e)?;
        roster.index_of(&member)
    }
}
