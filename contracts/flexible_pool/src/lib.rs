//! Flexible Savings Pool Contract
//!
//! Members deposit and withdraw at any time. Withdrawals pay a fee to the
//! treasury. When yield is enabled, yield the pool already holds can be
//! credited to members in proportion to their balances.
//!
//! The pool never reaches a terminal state.

#![no_std]

mod events;
mod storage;
mod types;

pub use savings_errors::ContractError;
pub use types::*;

use savings_core::{fees, ledger, math, validation};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};



#[cfg(test)]
mod test_yield;

fn load_member(e: &Env, member: &Address) -> Result<MemberRecord, ContractError> {
    storage::get_member(e, member).ok_or(ContractError::NotMember)
}

#[contract]
pub struct FlexiblePool;

#[contractimpl]
impl FlexiblePool {
    /// One-time initialization.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called twice
    /// * `InvalidMembers` - empty, duplicate, or oversized roster
    /// * `InvalidParameters` - `minimum_deposit <= 0`
    /// * `InvalidFeeRate` - either rate, or their sum, is >= 10000 bps
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        e: Env,
        token: Address,
        treasury: Address,
        members: Vec<Address>,
        minimum_deposit: i128,
        withdrawal_fee_bps: u32,
        yield_enabled: bool,
        treasury_fee_bps: u32,
    ) -> Result<(), ContractError> {
        if storage::has_config(&e) {
            return Err(ContractError::AlreadyInitialized);
        }

        let roster = validation::validate_flexible(
            &e,
            members,
            minimum_deposit,
            withdrawal_fee_bps,
            treasury_fee_bps,
        )?;

        let created_at = e.ledger().timestamp();
        let config = FlexibleConfig {
            token,
            treasury,
            minimum_deposit,
            withdrawal_fee_bps,
            yield_enabled,
            treasury_fee_bps,
            created_at,
        };

        for (index, member) in roster.iter().enumerate() {
            let record = MemberRecord {
                index: index as u32,
                balance: 0,
                total_deposited: 0,
                total_withdrawn: 0,
                yield_earned: 0,
            };
            storage::set_member(&e, &member, &record);
        }

        storage::set_config(&e, &config);
        storage::set_members(&e, &roster);
        storage::set_state(
            &e,
            &PoolState {
                total_balance: 0,
                total_deposited: 0,
                total_withdrawn: 0,
                withdrawal_fees: 0,
                yield_distributed: 0,
                yield_dust: 0,
            },
        );

        events::emit_pool_initialized(&e, &config.token, roster.count(), created_at);
        Ok(())
    }

    /// Pull `amount` from `member` into their balance.
    ///
    /// # Errors
    /// * `NotMember` - `member` is not on the roster
    /// * `BelowMinimum` - `amount < minimum_deposit`
    /// * `TransferFailed` - the token rejected the pull
    pub fn deposit(e: Env, member: Address, amount: i128) -> Result<i128, ContractError> {
        member.require_auth();

        let config = storage::get_config(&e)?;
        let mut record = load_member(&e, &member)?;
        if amount < config.minimum_deposit {
            return Err(ContractError::BelowMinimum);
        }
        let mut state = storage::get_state(&e)?;

        ledger::pull(&e, &config.token, &member, amount)?;

        record.balance = math::add_i128(record.balance, amount)?;
        record.total_deposited = math::add_i128(record.total_deposited, amount)?;
        state.total_balance = math::add_i128(state.total_balance, amount)?;
        state.total_deposited = math::add_i128(state.total_deposited, amount)?;

        storage::set_member(&e, &member, &record);
        storage::set_state(&e, &state);

        events::emit_deposited(&e, &member, amount, record.balance, state.total_balance);
        Ok(record.balance)
    }

    /// Withdraw `amount` from `member`'s balance. The member receives
    /// `amount` minus the withdrawal fee; the balance drops by the full
    /// `amount`. Returns the net paid.
    ///
    /// # Errors
    /// * `InvalidAmount` - `amount <= 0`
    /// * `NotMember` - `member` is not on the roster
    /// * `InsufficientBalance` - `amount` exceeds the balance
    /// * `TransferFailed` - the token rejected a payment
    pub fn withdraw(e: Env, member: Address, amount: i128) -> Result<i128, ContractError> {
        member.require_auth();

        let config = storage::get_config(&e)?;
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }
        let mut record = load_member(&e, &member)?;
        if amount > record.balance {
            return Err(ContractError::InsufficientBalance);
        }
        let mut state = storage::get_state(&e)?;

        let (net, fee) = fees::split(amount, config.withdrawal_fee_bps)?;

        record.balance = math::sub_i128(record.balance, amount)?;
        record.total_withdrawn = math::add_i128(record.total_withdrawn, amount)?;
        state.total_balance = math::sub_i128(state.total_balance, amount)?;
        state.total_withdrawn = math::add_i128(state.total_withdrawn, amount)?;
        state.withdrawal_fees = math::add_i128(state.withdrawal_fees, fee)?;

        storage::set_member(&e, &member, &record);
        storage::set_state(&e, &state);

        ledger::pay(&e, &config.token, &member, net)?;
        ledger::pay(&e, &config.token, &config.treasury, fee)?;

        events::emit_withdrawn(&e, &member, amount, net, fee, record.balance);
        Ok(net)
    }

    /// Credit `total_yield` to members pro rata to their balances.
    ///
    /// The yield must already sit in the pool on top of member balances.
    /// Each member is credited `floor(total_yield * balance / total)`; the
    /// rounding remainder is paid to the treasury. Returns the amount credited.
    ///
    /// # Errors
    /// * `YieldDisabled` - the pool was created without yield
    /// * `InvalidAmount` - `total_yield <= 0`
    /// * `NoDepositors` - every balance is zero
    /// * `YieldNotHeld` - the pool's token balance does not cover the yield
    /// * `TransferFailed` - the treasury payment was rejected
    pub fn distribute_yield(
        e: Env,
        caller: Address,
        total_yield: i128,
    ) -> Result<i128, ContractError> {
        caller.require_auth();

        let config = storage::get_config(&e)?;
        if !config.yield_enabled {
            return Err(ContractError::YieldDisabled);
        }
        if total_yield <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let mut state = storage::get_state(&e)?;
        if state.total_balance == 0 {
            return Err(ContractError::NoDepositors);
        }

        let held = ledger::pool_balance(&e, &config.token);
        if math::sub_i128(held, state.total_balance)? < total_yield {
            return Err(ContractError::YieldNotHeld);
        }

        let roster = storage::get_members(&e)?;
        let mut distributed = 0_i128;
        for member in roster.iter() {
            let mut record = load_member(&e, &member)?;
            if record.balance == 0 {
                continue;
            }
            let share = math::mul_div_floor(total_yield, record.balance, state.total_balance)?;
            if share == 0 {
                continue;
            }
            record.balance = math::add_i128(record.balance, share)?;
            record.yield_earned = math::add_i128(record.yield_earned, share)?;
            distributed = math::add_i128(distributed, share)?;
            storage::set_member(&e, &member, &record);
        }

        let dust = math::sub_i128(total_yield, distributed)?;
        state.total_balance = math::add_i128(state.total_balance, distributed)?;
        state.yield_distributed = math::add_i128(state.yield_distributed, distributed)?;
        state.yield_dust = math::add_i128(state.yield_dust, dust)?;
        storage::set_state(&e, &state);

        ledger::pay(&e, &config.token, &config.treasury, dust)?;

        events::emit_yield_distributed(&e, &caller, total_yield, distributed, dust);
        Ok(distributed)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_config(e: Env) -> Result<FlexibleConfig, ContractError> {
        storage::get_config(&e)
    }

    pub fn get_state(e: Env) -> Result<PoolState, ContractError> {
        storage::get_state(&e)
    }

    pub fn get_members(e: Env) -> Result<Vec<Address>, ContractError> {
        Ok(storage::get_members(&e)?.members)
    }

    pub fn get_member(e: Env, member: Address) -> Result<MemberRecord, ContractError> {
        storage::get_config(&e)?;
        load_member(&e, &member)
    }

    pub fn get_balance(e: Env, member: Address) -> Result<i128, ContractError> {
        storage::get_config(&e)?;
        Ok(load_member(&e, &member)?.balance)
    }
}
