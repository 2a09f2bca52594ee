//! Pool Parameter Validation
//!
//! One validator per pool kind. The pool contracts run these in
//! `initialize`; the registry runs the same functions before it deploys
//! anything, so a bad parameter set never produces a half-created pool.
//!
//! ## Constraints
//! - members: see [`Membership::new`]
//! - amounts (deposit, target, minimum deposit) must be `> 0`
//! - round duration must be `> 0` and must not overflow the ledger clock
//! - target deadline must be strictly after the current ledger timestamp
//! - fee rates: see [`validate_rates`]

use savings_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::fees::validate_rates;
use crate::math;
use crate::membership::Membership;

/// Amount parameters must be strictly positive.
pub fn validate_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidParameters);
    }
    Ok(())
}

/// Round duration must be positive and `now + duration` must fit in `u64`.
pub fn validate_duration(e: &Env, duration: u64) -> Result<(), ContractError> {
    if duration == 0 {
        return Err(ContractError::InvalidParameters);
    }
    math::add_u64(e.ledger().timestamp(), duration).map_err(|_| ContractError::InvalidParameters)?;
    Ok(())
}

/// Deadline must lie strictly in the future.
pub fn validate_deadline(e: &Env, deadline: u64) -> Result<(), ContractError> {
    if deadline <= e.ledger().timestamp() {
        return Err(ContractError::InvalidParameters);
    }
    Ok(())
}

/// Rotational pool parameters. Returns the validated roster.
pub fn validate_rotational(
    e: &Env,
    members: Vec<Address>,
    deposit_amount: i128,
    round_duration: u64,
    treasury_fee_bps: u32,
    relayer_fee_bps: u32,
) -> Result<Membership, ContractError> {
    let roster = Membership::new(e, members)?;
    validate_amount(deposit_amount)?;
    validate_duration(e, round_duration)?;
    validate_rates(&[treasury_fee_bps, relayer_fee_bps])?;
    Ok(roster)
}

/// Target pool parameters. Returns the validated roster.
pub fn validate_target(
    e: &Env,
    members: Vec<Address>,
    target_amount: i128,
    deadline: u64,
    treasury_fee_bps: u32,
) -> Result<Membership, ContractError> {
    let roster = Membership::new(e, members)?;
    validate_amount(target_amount)?;
    validate_deadline(e, deadline)?;
    validate_rates(&[treasury_fee_bps])?;
    Ok(roster)
}

/// Flexible pool parameters. Returns the validated roster.
pub fn validate_flexible(
    e: &Env,
    members: Vec<Address>,
    minimum_deposit: i128,
    withdrawal_fee_bps: u32,
    treasury_fee_bps: u32,
) -> Result<Membership, ContractError> {
    let roster = Membership::new(e, members)?;
    validate_amount(minimum_deposit)?;
    validate_rates(&[withdrawal_fee_bps, treasury_fee_bps])?;
    Ok(roster)
}
