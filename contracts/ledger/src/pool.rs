//! Instance counters for the reward pool and the principal held against it.
//!
//! `LOCKED` is the principal of every unsettled stake. The native pool derives
//! its reward coverage as the contract's SAC balance minus `LOCKED`; the token
//! pool keeps rewards in the explicit `POOL` counter. Either way a payout can
//! never be covered by another staker's locked principal.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::errors::StakeError;
use crate::storage;

const POOL: Symbol = symbol_short!("POOL");
const LOCKED: Symbol = symbol_short!("LOCKED");

pub fn balance(env: &Env) -> i128 {
    env.storage().instance().get(&POOL).unwrap_or(0)
}

/// Add `amount` to the pool and return the new balance.
pub fn credit(env: &Env, amount: i128) -> Result<i128, StakeError> {
    let next = balance(env)
        .checked_add(amount)
        .ok_or(StakeError::ArithmeticOverflow)?;
    env.storage().instance().set(&POOL, &next);
    storage::extend_instance_ttl(env);
    Ok(next)
}

/// Remove `amount` from the pool, failing without any write when the pool
/// is short.
pub fn debit(env: &Env, amount: i128) -> Result<i128, StakeError> {
    let current = balance(env);
    if amount > current {
        return Err(StakeError::InsufficientPoolFunds);
    }
    let next = current
        .checked_sub(amount)
        .ok_or(StakeError::ArithmeticOverflow)?;
    env.storage().instance().set(&POOL, &next);
    storage::extend_instance_ttl(env);
    Ok(next)
}

/// Principal of all unsettled stakes.
pub fn locked(env: &Env) -> i128 {
    env.storage().instance().get(&LOCKED).unwrap_or(0)
}

pub fn lock(env: &Env, amount: i128) -> Result<i128, StakeError> {
    let next = locked(env)
        .checked_add(amount)
        .ok_or(StakeError::ArithmeticOverflow)?;
    env.storage().instance().set(&LOCKED, &next);
    storage::extend_instance_ttl(env);
    Ok(next)
}

/// Release settled principal. `amount` always matches an earlier `lock`.
pub fn release(env: &Env, amount: i128) -> Result<i128, StakeError> {
    let next = locked(env)
        .checked_sub(amount)
        .filter(|v| *v >= 0)
        .ok_or(StakeError::ArithmeticOverflow)?;
    env.storage().instance().set(&LOCKED, &next);
    storage::extend_instance_ttl(env);
    Ok(next)
}

