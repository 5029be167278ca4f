use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::config::PoolConfig;
use crate::ledger::StakeRecord;

// ── Storage key constants ────────────────────────────────────────────────────

pub const INITIALIZED: Symbol = symbol_short!("INIT");
pub const CONFIG: Symbol = symbol_short!("CONFIG");

// Per-user persistent storage uses tuple keys:  (prefix, user_address)
const USER_STAKES: Symbol = symbol_short!("STAKES");

// ~30 days / ~180 days at 5s ledgers.
const TTL_THRESHOLD: u32 = 518_400;
const TTL_EXTEND_TO: u32 = 3_110_400;

fn stakes_key(user: &Address) -> (Symbol, Address) {
    (USER_STAKES, user.clone())
}

/// Extends the TTL of instance storage (config, init flag, pool counter).
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn store_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&CONFIG, config);
    env.storage().instance().set(&INITIALIZED, &true);
    extend_instance_ttl(env);
}

pub fn get_config(env: &Env) -> Option<PoolConfig> {
    env.storage().instance().get(&CONFIG)
}

/// Load a user's ledger in insertion order; empty when the user never staked.
pub fn load_stakes(env: &Env, user: &Address) -> Vec<StakeRecord> {
    env.storage()
        .persistent()
        .get(&stakes_key(user))
        .unwrap_or_else(|| Vec::new(env))
}

/// Persist a user's ledger and keep it alive alongside the instance.
pub fn save_stakes(env: &Env, user: &Address, stakes: &Vec<StakeRecord>) {
    let key = stakes_key(user);
    env.storage().persistent().set(&key, stakes);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    extend_instance_ttl(env);
}
