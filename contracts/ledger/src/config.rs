use soroban_sdk::{contracttype, Address};

/// Hard cap on the number of stakes a single address may ever open.
///
/// Records are never removed, so this bounds the ledger for the lifetime of
/// the pool, not just the number of open positions.
pub const MAX_STAKES_PER_USER: u32 = 3;

/// Longest lock a stake may request, in seconds (60 days).
pub const MAX_DURATION: u64 = 5_184_000;

/// Fixed-point denominator for `reward_rate`.
///
/// A stake of `amount` accrues `amount * reward_rate / RATE_SCALE` per second
/// of lock time.
pub const RATE_SCALE: i128 = 1_000_000_000;

/// One millionth of the principal per second; a 60-second stake of
/// 1_000_000 units matures at 1_000_060.
pub const DEFAULT_REWARD_RATE: i128 = 1_000;

/// Immutable pool configuration written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Funder of the pool. Never allowed to stake.
    pub owner: Address,
    /// SAC address of the asset this pool holds (native or token).
    pub asset: Address,
    /// Accrual per second per unit principal, scaled by [`RATE_SCALE`].
    pub reward_rate: i128,
}
