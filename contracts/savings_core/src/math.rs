//! Overflow-safe arithmetic helpers for pool accounting.
//!
//! All functions use checked arithmetic and return a `ContractError` on
//! overflow/underflow/div-by-zero, so call sites can propagate with `?`.

use savings_errors::ContractError;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` division.
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    if b == 0 {
        return Err(ContractError::DivisionByZero);
    }
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `floor(a * b / d)` for non-negative operands.
///
/// Used for both basis-point fees and pro-rata shares; the intermediate
/// product is checked.
#[inline]
pub fn mul_div_floor(a: i128, b: i128, d: i128) -> Result<i128, ContractError> {
    div_i128(mul_i128(a, b)?, d)
}

/// Checked `u64` addition for timestamps.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}
