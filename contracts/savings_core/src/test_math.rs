//! Tests for overflow-safe arithmetic helpers.

#![cfg(test)]

use crate::math;
use savings_errors::ContractError;

#[test]
fn test_mul_div_floor_basic() {
    assert_eq!(math::mul_div_floor(600, 200, 10_000), Ok(12));
    assert_eq!(math::mul_div_floor(7, 1, 2), Ok(3));
}

#[test]
fn test_mul_div_floor_overflow() {
    assert_eq!(
        math::mul_div_floor(i128::MAX, 2, 10_000),
        Err(ContractError::Overflow)
    );
}

#[test]
fn test_div_by_zero() {
    assert_eq!(math::div_i128(10, 0), Err(ContractError::DivisionByZero));
}

#[test]
fn test_add_sub() {
    assert_eq!(math::add_i128(i128::MAX, 1), Err(ContractError::Overflow));
    assert_eq!(math::sub_i128(i128::MIN, 1), Err(ContractError::Underflow));
    assert_eq!(math::sub_i128(5, 7), Ok(-2));
}

#[test]
fn test_add_u64_overflow() {
    assert_eq!(math::add_u64(u64::MAX, 1), Err(ContractError::Overflow));
    assert_eq!(math::add_u64(1, 2), Ok(3));
}
