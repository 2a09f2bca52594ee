#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Roster and pool parameter errors (codes 100-199).
    Membership,
    /// Rotational pool errors (codes 200-299).
    Rotational,
    /// Target pool errors (codes 300-399).
    Target,
    /// Flexible pool errors (codes 400-499).
    Flexible,
    /// Token transfer errors (codes 500-599).
    Ledger,
    /// Pool registry errors (codes 600-699).
    Registry,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by all savings pool contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Membership / parameters
///   200 - 299 : Rotational
///   300 - 399 : Target
///   400 - 499 : Flexible
///   500 - 599 : Ledger
///   600 - 699 : Registry
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Pool or registry has not been initialized yet.
    /// Contracts: rotational, target, flexible, registry
    NotInitialized = 1,

    /// `initialize` was already called on this instance.
    /// Contracts: rotational, target, flexible, registry
    AlreadyInitialized = 2,

    // --- Membership / parameters (100-199) ---
    /// Member list is empty, holds duplicates, or exceeds `MAX_MEMBERS`.
    /// Contracts: rotational, target, flexible
    InvalidMembers = 100,

    /// Address is not part of the pool roster.
    /// Contracts: rotational, target, flexible
    NotMember = 101,

    /// A creation parameter is out of range (amount, duration, deadline).
    /// Contracts: rotational, target, flexible, registry
    InvalidParameters = 102,

    /// A fee rate, or the sum of rates applied to one amount, is >= 10000 bps.
    /// Contracts: rotational, target, flexible
    InvalidFeeRate = 103,

    /// Amount argument must be strictly positive.
    /// Contracts: target, flexible
    InvalidAmount = 104,

    // --- Rotational (200-299) ---
    /// Member already contributed to the open round.
    AlreadyContributed = 200,

    /// Every member has been paid; the pool accepts no more value movement.
    PoolCompleted = 201,

    /// Round duration has not elapsed and not every member has contributed.
    RoundNotElapsed = 202,

    /// Round duration has elapsed; contributions are no longer accepted.
    RoundClosed = 203,

    /// No round record exists for the requested index.
    RoundNotFound = 204,

    // --- Target (300-399) ---
    /// Target pool already resolved; contributions are closed.
    PoolNotCollecting = 300,

    /// Contribution arrived after the deadline.
    DeadlinePassed = 301,

    /// Claims are only accepted once the pool has succeeded or failed.
    PoolNotResolved = 302,

    /// Member already claimed their share.
    AlreadyClaimed = 303,

    /// Member never contributed, there is nothing to pay out.
    NothingToClaim = 304,

    // --- Flexible (400-499) ---
    /// Deposit is smaller than the pool minimum.
    BelowMinimum = 400,

    /// Withdrawal exceeds the member's balance.
    InsufficientBalance = 401,

    /// Pool was created with yield distribution disabled.
    YieldDisabled = 402,

    /// Pool does not hold the reported yield on top of member balances.
    YieldNotHeld = 403,

    /// Total member balance is zero; yield has no one to go to.
    NoDepositors = 404,

    // --- Ledger (500-599) ---
    /// The token contract rejected a pull or payment.
    TransferFailed = 500,

    // --- Registry (600-699) ---
    /// Caller is not the registry admin.
    NotAdmin = 600,

    /// No wasm hash has been uploaded for the requested pool kind.
    PoolWasmNotSet = 601,

    /// No pool is recorded under the given id.
    PoolNotFound = 602,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    Underflow = 701,

    /// Checked division by zero.
    DivisionByZero = 702,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }

            ContractError::InvalidMembers
            | ContractError::NotMember
            | ContractError::InvalidParameters
            | ContractError::InvalidFeeRate
            | ContractError::InvalidAmount => ErrorCategory::Membership,

            ContractError::AlreadyContributed
            | ContractError::PoolCompleted
            | ContractError::RoundNotElapsed
            | ContractError::RoundClosed
            | ContractError::RoundNotFound => ErrorCategory::Rotational,

            ContractError::PoolNotCollecting
            | ContractError::DeadlinePassed
            | ContractError::PoolNotResolved
            | ContractError::AlreadyClaimed
            | ContractError::NothingToClaim => ErrorCategory::Target,

            ContractError::BelowMinimum
            | ContractError::InsufficientBalance
            | ContractError::YieldDisabled
            | ContractError::YieldNotHeld
            | ContractError::NoDepositors => ErrorCategory::Flexible,

            ContractError::TransferFailed => ErrorCategory::Ledger,

            ContractError::NotAdmin
            | ContractError::PoolWasmNotSet
            | ContractError::PoolNotFound => ErrorCategory::Registry,

            ContractError::Overflow
            | ContractError::Underflow
            | ContractError::DivisionByZero => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::InvalidMembers => {
                "Member list is empty, has duplicates, or is too large"
            }
            ContractError::NotMember => "Address is not a member of this pool",
            ContractError::InvalidParameters => "Pool creation parameter is out of range",
            ContractError::InvalidFeeRate => "Fee rates must stay below 10000 bps combined",
            ContractError::InvalidAmount => "Amount must be strictly positive (> 0)",
            ContractError::AlreadyContributed => "Member already contributed this round",
            ContractError::PoolCompleted => "Every rotation payout has been made",
            ContractError::RoundNotElapsed => {
                "Round is still open and contributions are incomplete"
            }
            ContractError::RoundClosed => "Round duration elapsed; contribution is late",
            ContractError::RoundNotFound => "No round found for the given index",
            ContractError::PoolNotCollecting => "Pool is resolved and no longer collecting",
            ContractError::DeadlinePassed => "Collection deadline has passed",
            ContractError::PoolNotResolved => "Pool has not reached a terminal state",
            ContractError::AlreadyClaimed => "Member has already claimed",
            ContractError::NothingToClaim => "Member has no contribution to claim",
            ContractError::BelowMinimum => "Deposit is below the pool minimum",
            ContractError::InsufficientBalance => "Insufficient balance for withdrawal",
            ContractError::YieldDisabled => "Yield distribution is disabled for this pool",
            ContractError::YieldNotHeld => "Pool does not hold the reported yield",
            ContractError::NoDepositors => "No member balance to distribute yield over",
            ContractError::TransferFailed => "Token transfer was rejected by the ledger",
            ContractError::NotAdmin => "Caller is not the admin",
            ContractError::PoolWasmNotSet => "No wasm hash configured for this pool kind",
            ContractError::PoolNotFound => "No pool recorded under the given id",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
            ContractError::DivisionByZero => "Division by zero in checked arithmetic",
        }
    }
}
