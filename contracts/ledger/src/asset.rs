//! Asset movement seam between the ledger and the asset a pool holds.
//!
//! The ledger only calls into an [`AssetTransfer`] after it has written its
//! own state for the operation in progress.

use soroban_sdk::{token, Address, Env};

use crate::errors::StakeError;
use crate::pool;

pub trait AssetTransfer {
    /// Error reported when an index does not address one of the caller's stakes.
    const MISSING_STAKE: StakeError;

    /// Move stake principal from `from` into the contract.
    fn deposit(env: &Env, asset: &Address, from: &Address, amount: i128);

    /// Move owner funding into the reward pool.
    fn fund(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), StakeError>;

    /// Confirm the pool covers `reward` and book it against the pool.
    ///
    /// Locked principal never counts as cover. Must not write anything when
    /// it fails.
    fn reserve_payout(env: &Env, asset: &Address, reward: i128) -> Result<(), StakeError>;

    /// Move `amount` out of the contract to `to`.
    fn send(env: &Env, asset: &Address, to: &Address, amount: i128);

    /// Funds currently available to pay out.
    fn pool_balance(env: &Env, asset: &Address) -> i128;
}

// ── Native asset ────────────────────────────────────────────────────────────

/// Pool over the network's native asset, reached through its SAC.
///
/// Principal arrives as a direct transfer authorised by the staker in the same
/// invocation. The pool is whatever the contract holds beyond locked
/// principal; owner top-ups need no separate bookkeeping.
pub struct NativeAsset;

impl AssetTransfer for NativeAsset {
    const MISSING_STAKE: StakeError = StakeError::UserStakeDoesNotExist;

    fn deposit(env: &Env, asset: &Address, from: &Address, amount: i128) {
        token::Client::new(env, asset).transfer(from, &env.current_contract_address(), &amount);
    }

    fn fund(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), StakeError> {
        Self::deposit(env, asset, from, amount);
        Ok(())
    }

    fn reserve_payout(env: &Env, asset: &Address, reward: i128) -> Result<(), StakeError> {
        if Self::pool_balance(env, asset) < reward {
            return Err(StakeError::InsufficientPoolFunds);
        }
        Ok(())
    }

    fn send(env: &Env, asset: &Address, to: &Address, amount: i128) {
        token::Client::new(env, asset).transfer(&env.current_contract_address(), to, &amount);
    }

    /// Contract balance less the principal of every unsettled stake.
    fn pool_balance(env: &Env, asset: &Address) -> i128 {
        let held = token::Client::new(env, asset).balance(&env.current_contract_address());
        held.saturating_sub(pool::locked(env))
    }
}

// ── Fungible token ──────────────────────────────────────────────────────────

/// Pool over a SEP-41 token.
///
/// Stakers and the owner `approve` the contract first; the contract then pulls
/// with `transfer_from` as spender. Rewards are paid from the explicit
/// [`pool`] counter, principal is returned from what the staker locked.
pub struct FungibleToken;

impl AssetTransfer for FungibleToken {
    const MISSING_STAKE: StakeError = StakeError::UserHasNoStakes;

    fn deposit(env: &Env, asset: &Address, from: &Address, amount: i128) {
        let contract = env.current_contract_address();
        token::Client::new(env, asset).transfer_from(&contract, from, &contract, &amount);
    }

    fn fund(env: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), StakeError> {
        pool::credit(env, amount)?;
        Self::deposit(env, asset, from, amount);
        Ok(())
    }

    fn reserve_payout(env: &Env, _asset: &Address, reward: i128) -> Result<(), StakeError> {
        pool::debit(env, reward)?;
        Ok(())
    }

    fn send(env: &Env, asset: &Address, to: &Address, amount: i128) {
        token::Client::new(env, asset).transfer(&env.current_contract_address(), to, &amount);
    }

    fn pool_balance(env: &Env, _asset: &Address) -> i128 {
        pool::balance(env)
    }
}
