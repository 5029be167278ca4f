//! Time-locked staking ledger shared by the native-asset and token pools.
//!
//! This crate provides:
//! - [`StakeRecord`] and the per-user append-only ledger kept in persistent storage.
//! - The accrual calculator ([`accrual::stake_balance`]), a pure function of
//!   `(record, rate, now)`.
//! - Owner/funding guards and the [`AssetTransfer`] seam each pool contract
//!   implements for the asset it holds.
//!
//! The contract crates are thin `#[contractimpl]` wrappers; every rule about
//! capacity, maturity and settlement lives here so both pools enforce it the
//! same way.

#![no_std]

pub mod accrual;
pub mod asset;
pub mod config;
pub mod errors;
pub mod events;
pub mod guard;
pub mod ledger;
pub mod pool;
pub mod storage;

pub use accrual::{matured_balance, reward_portion, stake_balance};
pub use asset::{AssetTransfer, FungibleToken, NativeAsset};
pub use config::{PoolConfig, MAX_DURATION, MAX_STAKES_PER_USER, RATE_SCALE};
pub use errors::StakeError;
pub use ledger::{StakeRecord, StakeStatus};

