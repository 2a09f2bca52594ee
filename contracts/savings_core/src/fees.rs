//! Fee Calculator
//!
//! Converts a gross amount and one or more basis-point rates into a net
//! amount and the matching fee amounts.
//!
//! ## Rounding
//! `fee = floor(gross * rate / 10_000)` and `net = gross - sum(fees)`, so the
//! fee rounds down and the payer keeps any dust.
//!
//! ## Bounds
//! Every rate must be below `BPS_DENOMINATOR`, and so must the sum of all
//! rates applied to one amount. This keeps `net > 0` whenever `gross > 0`.

use savings_errors::ContractError;

use crate::math;

/// Parts-per-ten-thousand denominator (100 bps = 1 %).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Check individual and combined bounds for rates applied to one amount.
pub fn validate_rates(rates: &[u32]) -> Result<(), ContractError> {
    let mut total: u64 = 0;
    for rate in rates {
        if *rate >= BPS_DENOMINATOR {
            return Err(ContractError::InvalidFeeRate);
        }
        total += *rate as u64;
    }
    if total >= BPS_DENOMINATOR as u64 {
        return Err(ContractError::InvalidFeeRate);
    }
    Ok(())
}

/// Split `gross` at `rate_bps`: returns `(net, fee)`.
pub fn split(gross: i128, rate_bps: u32) -> Result<(i128, i128), ContractError> {
    let (net, [fee]) = split_many(gross, [rate_bps])?;
    Ok((net, fee))
}

/// Apply several rates to the same gross amount.
///
/// Each fee is computed independently on `gross`; `net` is what remains
/// after all of them. Returns `(net, fees)` with `fees[i]` matching `rates[i]`.
pub fn split_many<const N: usize>(
    gross: i128,
    rates: [u32; N],
) -> Result<(i128, [i128; N]), ContractError> {
    validate_rates(&rates)?;
    if gross < 0 {
        return Err(ContractError::InvalidAmount);
    }

    let mut fees = [0_i128; N];
    let mut net = gross;
    for (i, rate) in rates.iter().enumerate() {
        let fee = math::mul_div_floor(gross, *rate as i128, BPS_DENOMINATOR as i128)?;
        net = math::sub_i128(net, fee)?;
        fees[i] = fee;
    }
    Ok((net, fees))
}
