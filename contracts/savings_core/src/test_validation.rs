//! Tests for pool creation parameter validation.

#![cfg(test)]

use crate::validation::*;
use savings_errors::ContractError;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{vec, Address, Env, Vec};

fn members(e: &Env) -> Vec<Address> {
    vec![e, Address::generate(e), Address::generate(e)]
}

#[test]
fn test_rotational_accepts_valid() {
    let e = Env::default();
    let roster = validate_rotational(&e, members(&e), 100, 86_400, 100, 50).unwrap();
    assert_eq!(roster.count(), 2);
}

#[test]
fn test_rotational_rejects_bad_amount_and_duration() {
    let e = Env::default();
    assert_eq!(
        validate_rotational(&e, members(&e), 0, 86_400, 100, 50),
        Err(ContractError::InvalidParameters)
    );
    assert_eq!(
        validate_rotational(&e, members(&e), 100, 0, 100, 50),
        Err(ContractError::InvalidParameters)
    );
}

#[test]
fn test_rotational_rejects_duration_overflow() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 1_000);
    assert_eq!(
        validate_rotational(&e, members(&e), 100, u64::MAX, 100, 50),
        Err(ContractError::InvalidParameters)
    );
}

#[test]
fn test_rotational_rejects_combined_rates() {
    let e = Env::default();
    assert_eq!(
        validate_rotational(&e, members(&e), 100, 60, 9_000, 1_000),
        Err(ContractError::InvalidFeeRate)
    );
}

#[test]
fn test_target_deadline_must_be_future() {
    let e = Env::default();
    e.ledger().with_mut(|li| li.timestamp = 5_000);
    assert_eq!(
        validate_target(&e, members(&e), 1_000, 5_000, 200),
        Err(ContractError::InvalidParameters)
    );
    assert_eq!(
        validate_target(&e, members(&e), 1_000, 4_999, 200),
        Err(ContractError::InvalidParameters)
    );
    assert!(validate_target(&e, members(&e), 1_000, 5_001, 200).is_ok());
}

#[test]
fn test_target_rejects_bad_members() {
    let e = Env::default();
    assert_eq!(
        validate_target(&e, Vec::new(&e), 1_000, 10, 200),
        Err(ContractError::InvalidMembers)
    );
}

#[test]
fn test_flexible_rates_checked_together() {
    let e = Env::default();
    assert!(validate_flexible(&e, members(&e), 10, 50, 100).is_ok());
    assert_eq!(
        validate_flexible(&e, members(&e), 10, 10_000, 0),
        Err(ContractError::InvalidFeeRate)
    );
    assert_eq!(
        validate_flexible(&e, members(&e), 0, 50, 100),
        Err(ContractError::InvalidParameters)
    );
}
