#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use stake_ledger::{guard, ledger, storage, AssetTransfer, NativeAsset};

pub use stake_ledger::{StakeError, StakeRecord, StakeStatus};

// ── Contract ─────────────────────────────────────────────────────────────────

/// Time-locked staking pool over the network's native asset.
#[contract]
pub struct StakingNativeContract;

#[contractimpl]
impl StakingNativeContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `owner`           – funder of the pool; may never stake.
    /// * `native_asset`    – SAC address of the native asset.
    /// * `initial_funding` – reward reserve pulled from `owner`; must be positive.
    /// * `reward_rate`     – accrual per second per unit principal, scaled by
    ///   `RATE_SCALE`.
    pub fn initialize(
        env: Env,
        owner: Address,
        native_asset: Address,
        initial_funding: i128,
        reward_rate: i128,
    ) -> Result<(), StakeError> {
        owner.require_auth();
        guard::initialize::<NativeAsset>(
            &env,
            &owner,
            &native_asset,
            initial_funding,
            reward_rate,
        )
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Lock `amount` of the native asset for `duration` seconds.
    ///
    /// Returns the index of the new stake in the caller's ledger.
    pub fn stake(
        env: Env,
        staker: Address,
        amount: i128,
        duration: u64,
    ) -> Result<u32, StakeError> {
        staker.require_auth();
        ledger::stake::<NativeAsset>(&env, &staker, amount, duration)
    }

    /// Settle the matured stake at `index`, returning principal plus reward.
    pub fn withdraw(env: Env, staker: Address, index: u32) -> Result<i128, StakeError> {
        staker.require_auth();
        ledger::withdraw::<NativeAsset>(&env, &staker, index)
    }

    // ── Funding ─────────────────────────────────────────────────────────────

    /// Owner top-up of the reward reserve. Returns the pool balance afterwards.
    pub fn deposit_into_contract(
        env: Env,
        owner: Address,
        amount: i128,
    ) -> Result<i128, StakeError> {
        owner.require_auth();
        guard::fund_pool::<NativeAsset>(&env, &owner, amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_user_stakes(env: Env, user: Address) -> Vec<StakeRecord> {
        ledger::user_stakes(&env, &user)
    }

    pub fn get_stake_count(env: Env, user: Address) -> u32 {
        ledger::stake_count(&env, &user)
    }

    /// Claimable balance of an unsettled stake at the current ledger time.
    pub fn get_current_stake_balance(
        env: Env,
        user: Address,
        index: u32,
    ) -> Result<i128, StakeError> {
        ledger::current_stake_balance::<NativeAsset>(&env, &user, index)
    }

    pub fn get_stake_status(
        env: Env,
        user: Address,
        index: u32,
    ) -> Result<StakeStatus, StakeError> {
        ledger::stake_status::<NativeAsset>(&env, &user, index)
    }

    pub fn owner(env: Env) -> Result<Address, StakeError> {
        Ok(guard::load_config(&env)?.owner)
    }

    pub fn native_asset(env: Env) -> Result<Address, StakeError> {
        Ok(guard::load_config(&env)?.asset)
    }

    pub fn reward_rate(env: Env) -> Result<i128, StakeError> {
        Ok(guard::load_config(&env)?.reward_rate)
    }

    /// Native asset held by the contract beyond locked principal.
    pub fn pool_balance(env: Env) -> Result<i128, StakeError> {
        let config = guard::load_config(&env)?;
        Ok(NativeAsset::pool_balance(&env, &config.asset))
    }

    /// Principal locked by unsettled stakes; never counted as reward cover.
    pub fn locked_principal(env: Env) -> i128 {
        ledger::locked_principal(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
