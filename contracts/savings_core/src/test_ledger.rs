//! Tests for the token ledger adapter, run from inside a host contract so
//! the pool is a real spender and holder.

#![cfg(test)]

use crate::ledger::{self, TransferOutcome};
use savings_errors::ContractError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct LedgerHost;

#[contractimpl]
impl LedgerHost {
    pub fn ping(_e: Env) -> u32 {
        1
    }
}

/// Registers the host and a Stellar asset, mints `mint` to a fresh member
/// and approves the host for `allowance`.
/// Returns `(host, token, member)`.
fn setup(e: &Env, mint: i128, allowance: i128) -> (Address, Address, Address) {
    e.mock_all_auths();

    let host = e.register(LedgerHost, ());
    let admin = Address::generate(e);
    let member = Address::generate(e);
    let token = e.register_stellar_asset_contract_v2(admin).address();
    if mint > 0 {
        StellarAssetClient::new(e, &token).mint(&member, &mint);
    }
    if allowance > 0 {
        let expiration = e.ledger().sequence().saturating_add(10_000);
        TokenClient::new(e, &token).approve(&member, &host, &allowance, &expiration);
    }

    (host, token, member)
}

#[test]
fn test_pull_moves_funds_into_pool() {
    let e = Env::default();
    let (host, token, member) = setup(&e, 1_000, 1_000);
    let result = e.as_contract(&host, || ledger::pull(&e, &token, &member, 400));
    assert_eq!(result, Ok(()));
    let tok = TokenClient::new(&e, &token);
    assert_eq!(tok.balance(&host), 400);
    assert_eq!(tok.balance(&member), 600);
}

#[test]
fn test_pull_without_allowance_fails() {
    let e = Env::default();
    let (host, token, member) = setup(&e, 1_000, 0);
    let result = e.as_contract(&host, || ledger::pull(&e, &token, &member, 400));
    assert_eq!(result, Err(ContractError::TransferFailed));
    assert_eq!(TokenClient::new(&e, &token).balance(&member), 1_000);
}

#[test]
fn test_try_pull_reports_outcome() {
    let e = Env::default();
    let (host, token, member) = setup(&e, 100, 1_000);
    let ok = e.as_contract(&host, || ledger::try_pull(&e, &token, &member, 100));
    assert_eq!(ok, TransferOutcome::Completed);

    // Balance is now empty; the second pull is rejected but does not abort.
    let failed = e.as_contract(&host, || ledger::try_pull(&e, &token, &member, 100));
    assert_eq!(failed, TransferOutcome::Failed);
    assert_eq!(TokenClient::new(&e, &token).balance(&host), 100);
}

#[test]
fn test_zero_amounts_are_noops() {
    let e = Env::default();
    let (host, token, member) = setup(&e, 0, 0);
    let pulled = e.as_contract(&host, || ledger::pull(&e, &token, &member, 0));
    let paid = e.as_contract(&host, || ledger::pay(&e, &token, &member, 0));
    assert_eq!(pulled, Ok(()));
    assert_eq!(paid, Ok(()));
}

#[test]
fn test_negative_amounts_rejected() {
    let e = Env::default();
    let (host, token, member) = setup(&e, 100, 100);
    let pulled = e.as_contract(&host, || ledger::pull(&e, &token, &member, -1));
    let paid = e.as_contract(&host, || ledger::pay(&e, &token, &member, -1));
    assert_eq!(pulled, Err(ContractError::InvalidAmount));
    assert_eq!(paid, Err(ContractError::InvalidAmount));
}

#[test]
fn test_pay_and_pool_balance() {
    let e = Env::default();
    let (host, token, member) = setup(&e, 500, 500);
    let recipient = Address::generate(&e);
    let result = e.as_contract(&host, || {
        ledger::pull(&e, &token, &member, 500)?;
        ledger::pay(&e, &token, &recipient, 120)?;
        Ok::<i128, ContractError>(ledger::pool_balance(&e, &token))
    });
    assert_eq!(result, Ok(380));
    assert_eq!(TokenClient::new(&e, &token).balance(&recipient), 120);
}

#[test]
fn test_pay_more_than_held_fails() {
    let e = Env::default();
    let (host, token, _member) = setup(&e, 0, 0);
    let recipient = Address::generate(&e);
    let result = e.as_contract(&host, || ledger::pay(&e, &token, &recipient, 1));
    assert_eq!(result, Err(ContractError::TransferFailed));
}
