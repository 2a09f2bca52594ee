//! Token ledger adapter for the pool contracts.
//!
//! The pool never moves value itself; it instructs the pool's SEP-41 token.
//! Pulls use `transfer_from` with the pool as spender, so members must approve
//! the pool beforehand. Payments use `transfer` from the pool's own balance.
//!
//! `pull` and `pay` turn any ledger rejection into `TransferFailed`; returning
//! that error reverts the whole invocation. `try_pull` reports a
//! `TransferOutcome` instead and leaves the decision to the caller.

use savings_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

/// Result of a best-effort ledger call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    Completed,
    Failed,
}

fn token_client<'a>(e: &'a Env, token: &Address) -> TokenClient<'a> {
    TokenClient::new(e, token)
}

/// Attempt to pull `amount` from `from` into the pool.
///
/// A zero amount completes without touching the token.
pub fn try_pull(e: &Env, token: &Address, from: &Address, amount: i128) -> TransferOutcome {
    if amount < 0 {
        return TransferOutcome::Failed;
    }
    if amount == 0 {
        return TransferOutcome::Completed;
    }

    let contract = e.current_contract_address();
    match token_client(e, token).try_transfer_from(&contract, from, &contract, &amount) {
        Ok(Ok(())) => TransferOutcome::Completed,
        _ => TransferOutcome::Failed,
    }
}

/// Pull `amount` from `from` into the pool.
///
/// # Errors
/// * `InvalidAmount` - negative amount
/// * `TransferFailed` - missing allowance, insufficient balance, or any other token rejection
pub fn pull(e: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    match try_pull(e, token, from, amount) {
        TransferOutcome::Completed => Ok(()),
        TransferOutcome::Failed => Err(ContractError::TransferFailed),
    }
}

/// Pay `amount` from the pool to `to`.
///
/// # Errors
/// * `InvalidAmount` - negative amount
/// * `TransferFailed` - the token rejected the transfer
pub fn pay(e: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount == 0 {
        return Ok(());
    }

    let contract = e.current_contract_address();
    match token_client(e, token).try_transfer(&contract, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::TransferFailed),
    }
}

/// Token balance currently held by the pool contract.
pub fn pool_balance(e: &Env, token: &Address) -> i128 {
    token_client(e, token).balance(&e.current_contract_address())
}
