#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub asset: Address,
    pub initial_funding: i128,
    pub reward_rate: i128,
    pub timestamp: u64,
}

/// Fired when the owner tops up the reward pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolFundedEvent {
    pub owner: Address,
    pub amount: i128,
    pub pool_balance: i128,
    pub timestamp: u64,
}

/// Fired when a user opens a stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeDepositedEvent {
    pub user: Address,
    pub index: u32,
    pub amount: i128,
    pub duration: u64,
    pub end_time: u64,
    pub timestamp: u64,
}

/// Fired when a matured stake is settled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeWithdrawnEvent {
    pub user: Address,
    pub index: u32,
    pub payout: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    asset: Address,
    initial_funding: i128,
    reward_rate: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            asset,
            initial_funding,
            reward_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_pool_funded(env: &Env, owner: Address, amount: i128, pool_balance: i128) {
    env.events().publish(
        (symbol_short!("FUNDED"), owner.clone()),
        PoolFundedEvent {
            owner,
            amount,
            pool_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_stake_deposited(
    env: &Env,
    user: Address,
    index: u32,
    amount: i128,
    duration: u64,
    end_time: u64,
) {
    env.events().publish(
        (symbol_short!("STK_DEP"), user.clone()),
        StakeDepositedEvent {
            user,
            index,
            amount,
            duration,
            end_time,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_stake_withdrawn(env: &Env, user: Address, index: u32, payout: i128) {
    env.events().publish(
        (symbol_short!("STK_WDR"), user.clone()),
        StakeWithdrawnEvent {
            user,
            index,
            payout,
            timestamp: env.ledger().timestamp(),
        },
    );
}
