#![no_std]

//! # Savings Core
//!
//! Building blocks shared by the rotational, target and flexible pool
//! contracts and by the pool registry.
//!
//! - [`membership`]: fixed, ordered member roster with index lookup
//! - [`fees`]: basis-point fee calculator, rounding in favour of the payer
//! - [`ledger`]: pull/pay adapter over the pool's SEP-41 token
//! - [`validation`]: creation-parameter checks run by pools and registry alike
//! - [`math`]: checked `i128` arithmetic returning `ContractError`

pub mod fees;
pub mod ledger;
pub mod math;
pub mod membership;
pub mod validation;

pub use fees::{split, split_many, validate_rates, BPS_DENOMINATOR};
pub use ledger::TransferOutcome;
pub use membership::{Membership, MAX_MEMBERS};
pub use savings_errors::ContractError;

/// Minimum instance TTL (in ledgers) before a bump is requested.
pub const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
/// Instance TTL target after a bump (~30 days at 5 s/ledger).
pub const INSTANCE_TTL_EXTEND: u32 = 518_400;
/// Minimum persistent-entry TTL before a bump is requested.
pub const PERSISTENT_TTL_THRESHOLD: u32 = 17_280;
/// Persistent-entry TTL target after a bump.
pub const PERSISTENT_TTL_EXTEND: u32 = 518_400;

#[cfg(test)]
mod test_fees;

#[cfg(test)]
mod test_math;


#[cfg(test)]
mod test_ledger;

#[cfg(test)]
mod test_validation;
