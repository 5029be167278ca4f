//! Owner and funding guards.

use soroban_sdk::{log, Address, Env};

use crate::asset::AssetTransfer;
use crate::config::PoolConfig;
use crate::errors::StakeError;
use crate::events;
use crate::storage;

/// Load the pool configuration, reverting if the pool is not initialised.
pub fn load_config(env: &Env) -> Result<PoolConfig, StakeError> {
    storage::get_config(env).ok_or(StakeError::NotInitialized)
}

/// Guard: revert if `caller` is not the pool owner.
pub fn require_owner(config: &PoolConfig, caller: &Address) -> Result<(), StakeError> {
    if *caller != config.owner {
        return Err(StakeError::YouAreNotTheOwner);
    }
    Ok(())
}

/// Guard: revert if `caller` is the pool owner.
pub fn require_not_owner(config: &PoolConfig, caller: &Address) -> Result<(), StakeError> {
    if *caller == config.owner {
        return Err(StakeError::OwnerCannotStakeInContract);
    }
    Ok(())
}

pub fn require_positive(amount: i128) -> Result<(), StakeError> {
    if amount <= 0 {
        return Err(StakeError::ZeroAmountNotAllowed);
    }
    Ok(())
}

/// Bootstrap a pool: fix owner, asset and rate, then pull the initial funding.
///
/// A pool cannot be created empty.
pub fn initialize<A: AssetTransfer>(
    env: &Env,
    owner: &Address,
    asset: &Address,
    initial_funding: i128,
    reward_rate: i128,
) -> Result<(), StakeError> {
    if storage::is_initialized(env) {
        return Err(StakeError::AlreadyInitialized);
    }
    require_positive(initial_funding)?;
    if reward_rate < 0 {
        return Err(StakeError::InvalidRewardRate);
    }

    let config = PoolConfig {
        owner: owner.clone(),
        asset: asset.clone(),
        reward_rate,
    };
    storage::store_config(env, &config);

    A::fund(env, asset, owner, initial_funding)?;

    log!(env, "pool initialized", owner.clone(), initial_funding, reward_rate);
    events::publish_initialized(env, owner.clone(), asset.clone(), initial_funding, reward_rate);

    Ok(())
}

/// Owner-only top-up of the reward pool. Returns the pool balance afterwards.
pub fn fund_pool<A: AssetTransfer>(
    env: &Env,
    caller: &Address,
    amount: i128,
) -> Result<i128, StakeError> {
    let config = load_config(env)?;
    require_owner(&config, caller)?;
    require_positive(amount)?;

    A::fund(env, &config.asset, caller, amount)?;

    let pool_balance = A::pool_balance(env, &config.asset);
    log!(env, "pool funded", caller.clone(), amount, pool_balance);
    events::publish_pool_funded(env, caller.clone(), amount, pool_balance);

    Ok(pool_balance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_positive_rejects_zero_and_negative() {
        assert_eq!(require_positive(0), Err(StakeError::ZeroAmountNotAllowed));
        assert_eq!(require_positive(-5), Err(StakeError::ZeroAmountNotAllowed));
        assert_eq!(require_positive(1), Ok(()));
    }
}
