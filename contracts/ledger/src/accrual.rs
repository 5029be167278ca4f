use crate::config::RATE_SCALE;
use crate::errors::StakeError;
use crate::ledger::StakeRecord;

// ── Core accrual engine ─────────────────────────────────────────────────────

/// Seconds of lock time that count towards the reward at `now`.
///
/// Clamped to `[0, duration]`: nothing accrues before `start_time` and the
/// clock stops at `end_time`.
pub fn accrued_seconds(record: &StakeRecord, now: u64) -> u64 {
    now.min(record.end_time).saturating_sub(record.start_time)
}

/// Claimable balance of `record` at `now`.
///
/// ```text
/// elapsed = min(now, end_time) − start_time
/// balance = amount + amount × reward_rate × elapsed / RATE_SCALE
/// ```
///
/// The balance equals `amount` at `start_time`, is non-decreasing while the
/// stake is active, and is frozen at its matured value from `end_time` on.
/// Overflow is reported as [`StakeError::ArithmeticOverflow`], never wrapped
/// or saturated.
///
/// # Arguments
/// * `record`      – the stake being valued
/// * `reward_rate` – accrual per second per unit principal, scaled by `RATE_SCALE`
/// * `now`         – trusted ledger timestamp supplied by the caller
pub fn stake_balance(
    record: &StakeRecord,
    reward_rate: i128,
    now: u64,
) -> Result<i128, StakeError> {
    let elapsed = i128::from(accrued_seconds(record, now));

    let reward = record
        .amount
        .checked_mul(reward_rate)
        .and_then(|v| v.checked_mul(elapsed))
        .and_then(|v| v.checked_div(RATE_SCALE))
        .ok_or(StakeError::ArithmeticOverflow)?;

    record
        .amount
        .checked_add(reward)
        .ok_or(StakeError::ArithmeticOverflow)
}

/// Balance the stake settles at once it has matured.
pub fn matured_balance(record: &StakeRecord, reward_rate: i128) -> Result<i128, StakeError> {
    stake_balance(record, reward_rate, record.end_time)
}

/// Reward accrued on top of the principal at `now`.
pub fn reward_portion(
    record: &StakeRecord,
    reward_rate: i128,
    now: u64,
) -> Result<i128, StakeError> {
    stake_balance(record, reward_rate, now)?
        .checked_sub(record.amount)
        .ok_or(StakeError::ArithmeticOverflow)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure-math tests with no Soroban environment dependency.

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;

    fn record(amount: i128, start_time: u64, duration: u64) -> StakeRecord {
        StakeRecord {
            amount,
            start_time,
            duration,
            end_time: start_time + duration,
            is_withdrawn: false,
        }
    }

    #[test]
    fn balance_equals_principal_at_start() {
        let r = record(1_000_000, 100, 60);
        assert_eq!(stake_balance(&r, 1_000, 100), Ok(1_000_000));
    }

    #[test]
    fn balance_before_start_is_principal() {
        let r = record(1_000_000, 100, 60);
        assert_eq!(stake_balance(&r, 1_000, 0), Ok(1_000_000));
    }

    #[test]
    fn balance_grows_linearly_while_active() {
        // 1_000_000 × 1_000 × 30 / 10^9 = 30
        let r = record(1_000_000, 0, 60);
        assert_eq!(stake_balance(&r, 1_000, 30), Ok(1_000_030));
    }

    #[test]
    fn balance_freezes_at_maturity() {
        let r = record(1_000_000, 0, 60);
        let matured = matured_balance(&r, 1_000).unwrap();
        assert_eq!(matured, 1_000_060);
        assert_eq!(stake_balance(&r, 1_000, 61), Ok(matured));
        assert_eq!(stake_balance(&r, 1_000, u64::MAX), Ok(matured));
    }

    #[test]
    fn zero_rate_never_accrues() {
        let r = record(500, 0, 60);
        assert_eq!(matured_balance(&r, 0), Ok(500));
        assert_eq!(reward_portion(&r, 0, 60), Ok(0));
    }

    #[test]
    fn sub_unit_rewards_round_down() {
        // 10 × 1_000 × 60 / 10^9 < 1
        let r = record(10, 0, 60);
        assert_eq!(matured_balance(&r, 1_000), Ok(10));
    }

    #[test]
    fn overflow_is_reported_not_wrapped() {
        let r = record(i128::MAX / 2, 0, 60);
        assert_eq!(
            matured_balance(&r, RATE_SCALE),
            Err(StakeError::ArithmeticOverflow)
        );
    }

    #[test]
    fn reward_portion_excludes_principal() {
        let r = record(2_000_000, 0, 100);
        assert_eq!(reward_portion(&r, 1_000, 100), Ok(200));
    }
}
