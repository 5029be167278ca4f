#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the accrual calculator.
//!
//! Invariants tested:
//! - The balance at `start_time` equals the principal
//! - The balance never decreases as time moves forward
//! - The balance is frozen from `end_time` on
//! - The reward portion is never negative

use proptest::prelude::*;
use stake_ledger::{matured_balance, reward_portion, stake_balance, StakeRecord, MAX_DURATION};

fn record(amount: i128, start_time: u64, duration: u64) -> StakeRecord {
    StakeRecord::open(amount, duration, start_time).unwrap()
}

// Keeps amount × rate × duration well inside i128.
fn amounts() -> impl Strategy<Value = i128> {
    1i128..=1_000_000_000_000_000i128
}

fn rates() -> impl Strategy<Value = i128> {
    0i128..=1_000_000i128
}

proptest! {
    #[test]
    fn prop_balance_at_start_is_principal(
        amount in amounts(),
        rate in rates(),
        start in 0u64..=1_000_000_000u64,
        duration in 1u64..=MAX_DURATION,
    ) {
        let r = record(amount, start, duration);
        prop_assert_eq!(stake_balance(&r, rate, start).unwrap(), amount);
    }

    #[test]
    fn prop_balance_is_monotonic(
        amount in amounts(),
        rate in rates(),
        duration in 1u64..=MAX_DURATION,
        a in 0u64..=MAX_DURATION * 2,
        b in 0u64..=MAX_DURATION * 2,
    ) {
        let r = record(amount, 0, duration);
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let before = stake_balance(&r, rate, earlier).unwrap();
        let after = stake_balance(&r, rate, later).unwrap();
        prop_assert!(before <= after, "balance decreased from {} to {}", before, after);
    }

    #[test]
    fn prop_balance_frozen_after_maturity(
        amount in amounts(),
        rate in rates(),
        duration in 1u64..=MAX_DURATION,
        delay in 0u64..=u32::MAX as u64,
    ) {
        let r = record(amount, 500, duration);
        let matured = matured_balance(&r, rate).unwrap();
        prop_assert_eq!(stake_balance(&r, rate, r.end_time + delay).unwrap(), matured);
    }

    #[test]
    fn prop_reward_never_negative(
        amount in amounts(),
        rate in rates(),
        duration in 1u64..=MAX_DURATION,
        now in 0u64..=MAX_DURATION * 2,
    ) {
        let r = record(amount, 0, duration);
        prop_assert!(reward_portion(&r, rate, now).unwrap() >= 0);
    }
}
