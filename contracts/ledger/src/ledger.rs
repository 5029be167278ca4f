//! Per-user stake ledger and its settlement lifecycle.
//!
//! Each address owns an append-only `Vec<StakeRecord>`; the position of a
//! record is its permanent index. A record moves `Active → Matured → Settled`
//! and `withdraw` is the only transition that writes to it.

use soroban_sdk::{contracttype, log, Address, Env, Vec};

use crate::accrual;
use crate::asset::AssetTransfer;
use crate::config::{MAX_DURATION, MAX_STAKES_PER_USER};
use crate::errors::StakeError;
use crate::events;
use crate::guard;
use crate::pool;
use crate::storage;

// ── Types ───────────────────────────────────────────────────────────────────

/// One locked position.
///
/// `is_withdrawn` flips to `true` exactly once, on settlement; the record is
/// then kept in place so later indices stay stable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    /// Principal in the asset's smallest unit.
    pub amount: i128,
    /// Ledger timestamp at creation.
    pub start_time: u64,
    /// Requested lock length in seconds.
    pub duration: u64,
    /// `start_time + duration`.
    pub end_time: u64,
    pub is_withdrawn: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StakeStatus {
    /// Locked; `now < end_time`.
    Active,
    /// Lock elapsed, payout not yet claimed.
    Matured,
    /// Paid out. Terminal.
    Settled,
}

impl StakeRecord {
    pub fn open(amount: i128, duration: u64, now: u64) -> Result<Self, StakeError> {
        let end_time = now
            .checked_add(duration)
            .ok_or(StakeError::ArithmeticOverflow)?;
        Ok(Self {
            amount,
            start_time: now,
            duration,
            end_time,
            is_withdrawn: false,
        })
    }

    pub fn is_matured(&self, now: u64) -> bool {
        now >= self.end_time
    }

    pub fn status(&self, now: u64) -> StakeStatus {
        if self.is_withdrawn {
            StakeStatus::Settled
        } else if self.is_matured(now) {
            StakeStatus::Matured
        } else {
            StakeStatus::Active
        }
    }
}

// ── Operations ──────────────────────────────────────────────────────────────

/// Open a new stake for `staker` and return its index.
///
/// Checks run in a fixed order so each rejection maps to exactly one error:
/// owner exclusion, positive amount, duration bounds, then capacity. The
/// matured payout is computed up front so an overflowing position is refused
/// here instead of becoming unwithdrawable later.
pub fn stake<A: AssetTransfer>(
    env: &Env,
    staker: &Address,
    amount: i128,
    duration: u64,
) -> Result<u32, StakeError> {
    let config = guard::load_config(env)?;
    guard::require_not_owner(&config, staker)?;
    guard::require_positive(amount)?;

    if duration > MAX_DURATION {
        return Err(StakeError::MaximumStakingDurationExceeded);
    }
    if duration == 0 {
        return Err(StakeError::ZeroDurationNotAllowed);
    }

    let mut stakes = storage::load_stakes(env, staker);
    if stakes.len() >= MAX_STAKES_PER_USER {
        return Err(StakeError::MaximumNumberOfStakesForUserReached);
    }

    let now = env.ledger().timestamp();
    let record = StakeRecord::open(amount, duration, now)?;
    accrual::matured_balance(&record, config.reward_rate)?;

    // 1. Record the position and lock its principal.
    let index = stakes.len();
    pool::lock(env, amount)?;
    stakes.push_back(record.clone());
    storage::save_stakes(env, staker, &stakes);

    // 2. Pull the principal into the contract.
    A::deposit(env, &config.asset, staker, amount);

    log!(env, "stake opened", staker.clone(), index, amount, duration);
    events::publish_stake_deposited(env, staker.clone(), index, amount, duration, record.end_time);

    Ok(index)
}

/// Settle the matured stake at `index` and return the payout sent.
///
/// The record is marked withdrawn and persisted before the asset leaves the
/// contract (checks-effects-interactions), so a re-entrant `withdraw` on the
/// same index fails with `StakeAlreadyWithdrawn`. Only the reward is drawn
/// from the pool; a pool that cannot cover it rejects the call before
/// anything is written.
pub fn withdraw<A: AssetTransfer>(
    env: &Env,
    staker: &Address,
    index: u32,
) -> Result<i128, StakeError> {
    let config = guard::load_config(env)?;

    let mut stakes = storage::load_stakes(env, staker);
    let mut record = stakes.get(index).ok_or(A::MISSING_STAKE)?;

    if record.is_withdrawn {
        return Err(StakeError::StakeAlreadyWithdrawn);
    }
    let now = env.ledger().timestamp();
    if !record.is_matured(now) {
        return Err(StakeError::StakeTimeHasNotEnded);
    }

    let reward = accrual::reward_portion(&record, config.reward_rate, now)?;
    let payout = record
        .amount
        .checked_add(reward)
        .ok_or(StakeError::ArithmeticOverflow)?;
    A::reserve_payout(env, &config.asset, reward)?;
    pool::release(env, record.amount)?;

    // Mark as withdrawn before transfer (checks-effects-interactions).
    record.is_withdrawn = true;
    stakes.set(index, record);
    storage::save_stakes(env, staker, &stakes);

    A::send(env, &config.asset, staker, payout);

    log!(env, "stake settled", staker.clone(), index, payout);
    events::publish_stake_withdrawn(env, staker.clone(), index, payout);

    Ok(payout)
}

/// Every record `user` ever opened, withdrawn ones included, in index order.
pub fn user_stakes(env: &Env, user: &Address) -> Vec<StakeRecord> {
    storage::load_stakes(env, user)
}

pub fn stake_count(env: &Env, user: &Address) -> u32 {
    storage::load_stakes(env, user).len()
}

/// Principal held for every unsettled stake in the pool.
pub fn locked_principal(env: &Env) -> i128 {
    pool::locked(env)
}

/// Live balance of an unsettled stake; maturity is not required.
pub fn current_stake_balance<A: AssetTransfer>(
    env: &Env,
    user: &Address,
    index: u32,
) -> Result<i128, StakeError> {
    let config = guard::load_config(env)?;
    let record = open_record::<A>(env, user, index)?;
    accrual::stake_balance(&record, config.reward_rate, env.ledger().timestamp())
}

pub fn stake_status<A: AssetTransfer>(
    env: &Env,
    user: &Address,
    index: u32,
) -> Result<StakeStatus, StakeError> {
    let record = storage::load_stakes(env, user)
        .get(index)
        .ok_or(A::MISSING_STAKE)?;
    Ok(record.status(env.ledger().timestamp()))
}

/// Look up `index` for `user`, rejecting settled records.
fn open_record<A: AssetTransfer>(
    env: &Env,
    user: &Address,
    index: u32,
) -> Result<StakeRecord, StakeError> {
    let record = storage::load_stakes(env, user)
        .get(index)
        .ok_or(A::MISSING_STAKE)?;
    if record.is_withdrawn {
        return Err(StakeError::StakeAlreadyWithdrawn);
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start: u64, duration: u64) -> StakeRecord {
        StakeRecord::open(100, duration, start).unwrap()
    }

    #[test]
    fn open_sets_end_time() {
        let r = record(1_000, 60);
        assert_eq!(r.end_time, 1_060);
        assert_eq!(r.end_time - r.start_time, 60);
        assert!(!r.is_withdrawn);
    }

    #[test]
    fn open_rejects_end_time_overflow() {
        assert_eq!(
            StakeRecord::open(100, 10, u64::MAX),
            Err(StakeError::ArithmeticOverflow)
        );
    }

    #[test]
    fn status_follows_lifecycle() {
        let mut r = record(0, 60);
        assert_eq!(r.status(0), StakeStatus::Active);
        assert_eq!(r.status(59), StakeStatus::Active);
        assert_eq!(r.status(60), StakeStatus::Matured);
        assert_eq!(r.status(10_000), StakeStatus::Matured);

        r.is_withdrawn = true;
        assert_eq!(r.status(0), StakeStatus::Settled);
        assert_eq!(r.status(10_000), StakeStatus::Settled);
    }
}
