#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the farm is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
    pub reward_per_block: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired when a participant deposits stake tokens.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub participant: Address,
    pub amount: i128,
    pub staked_amount: i128,
    pub new_total_staked: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired when a participant withdraws their whole stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub participant: Address,
    pub amount: i128,
    /// Pending rewards left behind; unclaimable until the next deposit.
    pub unclaimed_rewards: i128,
    pub new_total_staked: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired when a participant claims pending rewards.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardClaimedEvent {
    pub participant: Address,
    pub amount: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired after every distribution pass, including passes that credit nothing.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsDistributedEvent {
    pub total_credited: i128,
    pub participants_credited: u32,
    pub from_block: u32,
    pub to_block: u32,
    pub reward_per_block: i128,
    pub timestamp: u64,
}

/// Fired when the admin changes the per-block reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardRateSetEvent {
    pub old_rate: i128,
    pub new_rate: i128,
    pub block: u32,
    pub timestamp: u64,
}

/// Fired when an admin transfer is proposed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferProposedEvent {
    pub current_admin: Address,
    pub proposed_admin: Address,
    pub timestamp: u64,
}

/// Fired when an admin transfer is accepted.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferAcceptedEvent {
    pub old_admin: Address,
    pub new_admin: Address,
    pub timestamp: u64,
}

/// Fired when a pending admin transfer is cancelled.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferCancelledEvent {
    pub admin: Address,
    pub cancelled_proposed: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    stake_token: Address,
    reward_token: Address,
    reward_per_block: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            stake_token,
            reward_token,
            reward_per_block,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(
    env: &Env,
    participant: Address,
    amount: i128,
    staked_amount: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), participant.clone()),
        DepositedEvent {
            participant,
            amount,
            staked_amount,
            new_total_staked,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    participant: Address,
    amount: i128,
    unclaimed_rewards: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), participant.clone()),
        WithdrawnEvent {
            participant,
            amount,
            unclaimed_rewards,
            new_total_staked,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_claimed(env: &Env, participant: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), participant.clone()),
        RewardClaimedEvent {
            participant,
            amount,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_distributed(
    env: &Env,
    total_credited: i128,
    participants_credited: u32,
    from_block: u32,
    reward_per_block: i128,
) {
    env.events().publish(
        (symbol_short!("DISTRIB"),),
        RewardsDistributedEvent {
            total_credited,
            participants_credited,
            from_block,
            to_block: env.ledger().sequence(),
            reward_per_block,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_rate_set(env: &Env, old_rate: i128, new_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_RATE"),),
        RewardRateSetEvent {
            old_rate,
            new_rate,
            block: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_proposed(env: &Env, current_admin: Address, proposed_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_PROP"), current_admin.clone()),
        AdminTransferProposedEvent {
            current_admin,
            proposed_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_accepted(env: &Env, old_admin: Address, new_admin: Address) {
    env.events().publish(
        (symbol_short!("ADM_ACPT"), new_admin.clone()),
        AdminTransferAcceptedEvent {
            old_admin,
            new_admin,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_admin_transfer_cancelled(env: &Env, admin: Address, cancelled_proposed: Address) {
    env.events().publish(
        (symbol_short!("ADM_CNCL"), admin.clone()),
        AdminTransferCancelledEvent {
            admin,
            cancelled_proposed,
            timestamp: env.ledger().timestamp(),
        },
    );
}
