//! Storage layer for the farm: participant records, the registration-ordered
//! participant index, and the pool singleton.
//!
//! Nothing here enforces business rules. The contract entry points in
//! `lib.rs` are responsible for keeping the pool aggregate consistent with
//! the individual records.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

// ── Storage keys ─────────────────────────────────────────────────────────────

const POOL: Symbol = symbol_short!("POOL");
const PENDING_ADMIN: Symbol = symbol_short!("PEND_ADM");
const PARTICIPANT_COUNT: Symbol = symbol_short!("PART_CNT");

// Per-participant persistent storage uses tuple keys: (prefix, participant)
const PARTICIPANT: Symbol = symbol_short!("USER");

// Registration order uses tuple keys: (prefix, index). One small entry per
// participant keeps every write bounded as the farm grows.
const PARTICIPANT_INDEX: Symbol = symbol_short!("PARTS");

/// Ledgers of headroom left below the network maximum before an entry is
/// re-extended. Roughly one week at five seconds per ledger.
const TTL_BUMP_WINDOW: u32 = 60 * 60 * 24 / 5 * 7;

// ── Types ────────────────────────────────────────────────────────────────────

/// A participant's position in the farm.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Participant {
    pub staked_amount: i128,
    pub pending_rewards: i128,
    pub is_staking: bool,
}

/// Singleton aggregate state of the pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolState {
    /// Only address allowed to distribute rewards and change the rate.
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    /// Sum of `staked_amount` over every record with `is_staking` set.
    pub total_staked: i128,
    /// Reward token base units emitted per ledger across all stakers.
    pub reward_per_block: i128,
    /// Ledger sequence of the last completed distribution pass.
    pub last_distribution_block: u32,
}

// ── TTL helpers ──────────────────────────────────────────────────────────────

fn extend_instance_ttl(env: &Env) {
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl.saturating_sub(TTL_BUMP_WINDOW), max_ttl);
}

fn extend_persistent_ttl<K>(env: &Env, key: &K)
where
    K: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    let max_ttl = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl(key, max_ttl.saturating_sub(TTL_BUMP_WINDOW), max_ttl);
}

// ── Pool ─────────────────────────────────────────────────────────────────────

pub fn has_pool(env: &Env) -> bool {
    env.storage().instance().has(&POOL)
}

pub fn get_pool(env: &Env) -> Option<PoolState> {
    env.storage().instance().get(&POOL)
}

pub fn set_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&POOL, pool);
    extend_instance_ttl(env);
}

/// Running aggregate of active stake. Zero before initialization.
pub fn total_staked(env: &Env) -> i128 {
    get_pool(env).map(|pool| pool.total_staked).unwrap_or(0)
}

// ── Participants ─────────────────────────────────────────────────────────────

fn participant_key(participant: &Address) -> (Symbol, Address) {
    (PARTICIPANT, participant.clone())
}

/// Returns the stored record, or the all-zero default when absent.
pub fn get(env: &Env, participant: &Address) -> Participant {
    let key = participant_key(participant);
    let record: Option<Participant> = env.storage().persistent().get(&key);
    match record {
        Some(record) => {
            extend_persistent_ttl(env, &key);
            record
        }
        None => Participant::default(),
    }
}

pub fn set(env: &Env, participant: &Address, record: &Participant) {
    let key = participant_key(participant);
    env.storage().persistent().set(&key, record);
    extend_persistent_ttl(env, &key);
}

pub fn is_registered(env: &Env, participant: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&participant_key(participant))
}

fn index_key(index: u32) -> (Symbol, u32) {
    (PARTICIPANT_INDEX, index)
}

/// Number of addresses that have ever deposited.
pub fn participant_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&PARTICIPANT_COUNT)
        .unwrap_or(0)
}

/// The address registered at `index`, counting from zero.
pub fn participant_at(env: &Env, index: u32) -> Option<Address> {
    let key = index_key(index);
    let participant: Option<Address> = env.storage().persistent().get(&key);
    if participant.is_some() {
        extend_persistent_ttl(env, &key);
    }
    participant
}

/// Every address that has ever deposited, in registration order.
///
/// Reads one entry per participant. Prefer `participant_at` when walking a
/// large farm.
pub fn participants(env: &Env) -> Vec<Address> {
    let mut list = Vec::new(env);
    for index in 0..participant_count(env) {
        if let Some(participant) = participant_at(env, index) {
            list.push_back(participant);
        }
    }
    list
}

/// Appends `participant` to the registration index if it is not there yet.
///
/// Must be called before the participant's first record is written, since
/// registration is detected by the absence of a stored record.
pub fn register(env: &Env, participant: &Address) {
    if is_registered(env, participant) {
        return;
    }
    let index = participant_count(env);
    let key = index_key(index);
    env.storage().persistent().set(&key, participant);
    extend_persistent_ttl(env, &key);
    env.storage()
        .instance()
        .set(&PARTICIPANT_COUNT, &(index + 1));
}

// ── Admin transfer ───────────────────────────────────────────────────────────

pub fn get_pending_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_ADMIN)
}

pub fn set_pending_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&PENDING_ADMIN, admin);
}

pub fn remove_pending_admin(env: &Env) {
    env.storage().instance().remove(&PENDING_ADMIN);
}
