//! Tests for the basis-point fee calculator.

#![cfg(test)]

use crate::fees::{split, split_many, validate_rates, BPS_DENOMINATOR};
use savings_errors::ContractError;

#[test]
fn test_split_basic() {
    assert_eq!(split(10_000, 100), Ok((9_900, 100)));
}

#[test]
fn test_split_zero_rate_keeps_everything() {
    assert_eq!(split(1_234, 0), Ok((1_234, 0)));
}

#[test]
fn test_split_zero_gross() {
    assert_eq!(split(0, 250), Ok((0, 0)));
}

#[test]
fn test_split_rounds_fee_down() {
    // 150 * 1% = 1.5, payer keeps the half unit.
    assert_eq!(split(150, 100), Ok((149, 1)));
    // 99 * 1% = 0.99
    assert_eq!(split(99, 100), Ok((99, 0)));
}

#[test]
fn test_split_net_positive_at_max_rate() {
    let (net, fee) = split(1, BPS_DENOMINATOR - 1).unwrap();
    assert_eq!(fee, 0);
    assert_eq!(net, 1);

    let (net, fee) = split(10_000, BPS_DENOMINATOR - 1).unwrap();
    assert_eq!(fee, 9_999);
    assert_eq!(net, 1);
}

#[test]
fn test_split_rejects_full_rate() {
    assert_eq!(split(100, BPS_DENOMINATOR), Err(ContractError::InvalidFeeRate));
    assert_eq!(split(100, u32::MAX), Err(ContractError::InvalidFeeRate));
}

#[test]
fn test_split_rejects_negative_gross() {
    assert_eq!(split(-1, 100), Err(ContractError::InvalidAmount));
}

#[test]
fn test_split_overflow() {
    assert_eq!(split(i128::MAX, 100), Err(ContractError::Overflow));
}

#[test]
fn test_split_many_treasury_and_relayer() {
    // 300 gross, 1% treasury, 0.5% relayer.
    let (net, [treasury, relayer]) = split_many(300, [100, 50]).unwrap();
    assert_eq!(treasury, 3);
    assert_eq!(relayer, 1);
    assert_eq!(net, 296);
    assert_eq!(net + treasury + relayer, 300);
}

#[test]
fn test_split_many_fees_on_gross_not_net() {
    let (net, [a, b]) = split_many(10_000, [5_000, 1_000]).unwrap();
    assert_eq!(a, 5_000);
    assert_eq!(b, 1_000);
    assert_eq!(net, 4_000);
}

#[test]
fn test_split_many_rejects_combined_rate() {
    assert_eq!(
        split_many(100, [6_000, 4_000]),
        Err(ContractError::InvalidFeeRate)
    );
    assert!(split_many(100, [6_000, 3_999]).is_ok());
}

#[test]
fn test_validate_rates() {
    assert_eq!(validate_rates(&[]), Ok(()));
    assert_eq!(validate_rates(&[0, 0, 0]), Ok(()));
    assert_eq!(validate_rates(&[9_999]), Ok(()));
    assert_eq!(validate_rates(&[10_000]), Err(ContractError::InvalidFeeRate));
    assert_eq!(
        validate_rates(&[5_000, 5_000]),
        Err(ContractError::InvalidFeeRate)
    );
    assert_eq!(
        validate_rates(&[u32::MAX, u32::MAX]),
        Err(ContractError::InvalidFeeRate)
    );
}
