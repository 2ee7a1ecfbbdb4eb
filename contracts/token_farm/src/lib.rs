#![no_std]

pub mod accrual;
pub mod events;
pub mod ledger;
pub mod registry;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use registry::{Participant, PoolState};

// ── Reward bounds ────────────────────────────────────────────────────────────

/// Fixed-point scale of the farm's token amounts (18 decimals).
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Lowest accepted per-block reward: 0.1 reward token.
pub const MIN_REWARD_PER_BLOCK: i128 = SCALE / 10;

/// Highest accepted per-block reward: 10 reward tokens.
pub const MAX_REWARD_PER_BLOCK: i128 = 10 * SCALE;

/// Suggested deployment rate: 1 reward token per block.
pub const DEFAULT_REWARD_PER_BLOCK: i128 = SCALE;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ZeroAmount = 4,
    InsufficientAllowanceOrBalance = 5,
    NotStaking = 6,
    RewardOutOfRange = 7,
    TokensIdentical = 8,
    NoPendingAdmin = 9,
    RewardMintFailed = 10,
    ArithmeticOverflow = 11,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct TokenFarmContract;

#[contractimpl]
impl TokenFarmContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the farm.
    ///
    /// * `stake_token`      – token participants deposit (the LP token).
    /// * `reward_token`     – token minted on claim. The farm must be made its
    ///                        admin before any claim can pay out.
    /// * `reward_per_block` – reward base units emitted per ledger across all
    ///                        stakers, within the accepted bounds.
    pub fn initialize(
        env: Env,
        admin: Address,
        stake_token: Address,
        reward_token: Address,
        reward_per_block: i128,
    ) -> Result<(), ContractError> {
        if registry::has_pool(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }
        Self::require_rate_in_range(reward_per_block)?;

        let pool = PoolState {
            admin: admin.clone(),
            stake_token: stake_token.clone(),
            reward_token: reward_token.clone(),
            total_staked: 0,
            reward_per_block,
            last_distribution_block: env.ledger().sequence(),
        };
        registry::set_pool(&env, &pool);

        events::publish_initialized(&env, admin, stake_token, reward_token, reward_per_block);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens.
    ///
    /// The participant must have approved the farm for at least `amount`.
    /// Rewards are not settled here; they accrue only on distribution.
    pub fn deposit(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        let mut pool = Self::load_pool(&env)?;
        participant.require_auth();

        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }

        ledger::pull_stake(&env, &pool.stake_token, &participant, amount)?;

        let mut record = registry::get(&env, &participant);
        record.staked_amount = record
            .staked_amount
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        record.is_staking = true;

        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        registry::register(&env, &participant);
        registry::set(&env, &participant, &record);
        registry::set_pool(&env, &pool);

        events::publish_deposited(
            &env,
            participant,
            amount,
            record.staked_amount,
            pool.total_staked,
        );

        Ok(())
    }

    /// Withdraw the participant's whole stake.
    ///
    /// Pending rewards stay on the record but `claim_rewards` refuses them
    /// until the participant deposits again.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, ContractError> {
        let mut pool = Self::load_pool(&env)?;
        participant.require_auth();

        let mut record = registry::get(&env, &participant);
        if !record.is_staking {
            return Err(ContractError::NotStaking);
        }

        let amount = record.staked_amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        record.staked_amount = 0;
        record.is_staking = false;

        // Effects before the transfer (checks-effects-interactions).
        registry::set(&env, &participant, &record);
        registry::set_pool(&env, &pool);

        ledger::push_stake(&env, &pool.stake_token, &participant, amount)?;

        events::publish_withdrawn(
            &env,
            participant,
            amount,
            record.pending_rewards,
            pool.total_staked,
        );

        Ok(amount)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Mint every pending reward to the participant and return the amount.
    ///
    /// Only active stakers may claim. Claiming with nothing pending succeeds
    /// and pays zero.
    pub fn claim_rewards(env: Env, participant: Address) -> Result<i128, ContractError> {
        let pool = Self::load_pool(&env)?;
        participant.require_auth();

        let mut record = registry::get(&env, &participant);
        if !record.is_staking {
            return Err(ContractError::NotStaking);
        }

        let amount = record.pending_rewards;
        if amount == 0 {
            return Ok(0);
        }

        record.pending_rewards = 0;
        registry::set(&env, &participant, &record);

        ledger::mint_reward(&env, &pool.reward_token, &participant, amount)?;

        events::publish_reward_claimed(&env, participant, amount);

        Ok(amount)
    }

    /// Credit every active staker with their share of the rewards emitted
    /// since the previous distribution, and return the total credited.
    ///
    /// All shares are computed against the pool as it stood when the call
    /// started. Visits every registered participant.
    pub fn distribute_rewards_all(env: Env, caller: Address) -> Result<i128, ContractError> {
        let mut pool = Self::load_pool(&env)?;
        caller.require_auth();
        Self::require_admin(&pool, &caller)?;

        let current_block = env.ledger().sequence();
        let from_block = pool.last_distribution_block;
        let elapsed = accrual::elapsed_blocks(from_block, current_block);
        let total_staked = pool.total_staked;
        let reward_per_block = pool.reward_per_block;

        let mut total_credited: i128 = 0;
        let mut participants_credited: u32 = 0;

        if elapsed > 0 && total_staked > 0 {
            for index in 0..registry::participant_count(&env) {
                let Some(participant) = registry::participant_at(&env, index) else {
                    continue;
                };
                let mut record = registry::get(&env, &participant);
                if !record.is_staking {
                    continue;
                }

                let accrued = accrual::compute_accrual(
                    &env,
                    record.staked_amount,
                    total_staked,
                    reward_per_block,
                    elapsed,
                )?;
                if accrued == 0 {
                    continue;
                }

                record.pending_rewards = record
                    .pending_rewards
                    .checked_add(accrued)
                    .ok_or(ContractError::ArithmeticOverflow)?;
                registry::set(&env, &participant, &record);

                total_credited = total_credited
                    .checked_add(accrued)
                    .ok_or(ContractError::ArithmeticOverflow)?;
                participants_credited += 1;
            }
        }

        pool.last_distribution_block = current_block;
        registry::set_pool(&env, &pool);

        log!(
            &env,
            "distributed {} over {} blocks to {} participants",
            total_credited,
            elapsed,
            participants_credited
        );
        events::publish_rewards_distributed(
            &env,
            total_credited,
            participants_credited,
            from_block,
            reward_per_block,
        );

        Ok(total_credited)
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Update the per-block reward.
    ///
    /// Applies to every later distribution, including the blocks already
    /// elapsed since the last one. Rewards already pending are untouched.
    pub fn set_reward_per_block(
        env: Env,
        caller: Address,
        new_rate: i128,
    ) -> Result<(), ContractError> {
        let mut pool = Self::load_pool(&env)?;
        caller.require_auth();
        Self::require_admin(&pool, &caller)?;
        Self::require_rate_in_range(new_rate)?;

        let old_rate = pool.reward_per_block;
        pool.reward_per_block = new_rate;
        registry::set_pool(&env, &pool);

        events::publish_reward_rate_set(&env, old_rate, new_rate);

        Ok(())
    }

    // ── Admin transfer (two-step) ──────────────────────────────────────────

    /// Propose a new admin address. Only the current admin can call this.
    /// The new admin must call `accept_admin` to complete the transfer.
    pub fn propose_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), ContractError> {
        let pool = Self::load_pool(&env)?;
        current_admin.require_auth();
        Self::require_admin(&pool, &current_admin)?;

        registry::set_pending_admin(&env, &new_admin);

        events::publish_admin_transfer_proposed(&env, current_admin, new_admin);

        Ok(())
    }

    /// Accept the pending admin transfer. Only the proposed new admin can call this.
    pub fn accept_admin(env: Env, new_admin: Address) -> Result<(), ContractError> {
        let mut pool = Self::load_pool(&env)?;
        new_admin.require_auth();

        let pending = registry::get_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        if new_admin != pending {
            return Err(ContractError::Unauthorized);
        }

        let old_admin = pool.admin.clone();
        pool.admin = new_admin.clone();
        registry::set_pool(&env, &pool);
        registry::remove_pending_admin(&env);

        events::publish_admin_transfer_accepted(&env, old_admin, new_admin);

        Ok(())
    }

    /// Cancel a pending admin transfer. Only the current admin can call this.
    pub fn cancel_admin_transfer(env: Env, current_admin: Address) -> Result<(), ContractError> {
        let pool = Self::load_pool(&env)?;
        current_admin.require_auth();
        Self::require_admin(&pool, &current_admin)?;

        let pending = registry::get_pending_admin(&env).ok_or(ContractError::NoPendingAdmin)?;
        registry::remove_pending_admin(&env);

        events::publish_admin_transfer_cancelled(&env, current_admin, pending);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the participant's record; all zero if they never deposited.
    pub fn users(env: Env, participant: Address) -> Participant {
        registry::get(&env, &participant)
    }

    /// Return the current per-block reward.
    pub fn reward_per_block(env: Env) -> Result<i128, ContractError> {
        Self::load_pool(&env).map(|pool| pool.reward_per_block)
    }

    pub fn get_pool(env: Env) -> Result<PoolState, ContractError> {
        Self::load_pool(&env)
    }

    /// Return the sum of all currently staked tokens.
    pub fn get_total_staked(env: Env) -> i128 {
        registry::total_staked(&env)
    }

    /// Every address that has ever deposited, in registration order.
    pub fn get_participants(env: Env) -> Vec<Address> {
        registry::participants(&env)
    }

    pub fn get_participant_count(env: Env) -> u32 {
        registry::participant_count(&env)
    }

    /// The address registered at `index`, for paging through a large farm.
    pub fn get_participant(env: Env, index: u32) -> Option<Address> {
        registry::participant_at(&env, index)
    }

    /// Pending rewards plus what a distribution at the current ledger would
    /// add, without mutating state.
    pub fn preview_rewards(env: Env, participant: Address) -> Result<i128, ContractError> {
        let pool = Self::load_pool(&env)?;
        let record = registry::get(&env, &participant);
        if !record.is_staking {
            return Ok(record.pending_rewards);
        }

        let elapsed =
            accrual::elapsed_blocks(pool.last_distribution_block, env.ledger().sequence());
        let accrued = accrual::compute_accrual(
            &env,
            record.staked_amount,
            pool.total_staked,
            pool.reward_per_block,
            elapsed,
        )?;

        record
            .pending_rewards
            .checked_add(accrued)
            .ok_or(ContractError::ArithmeticOverflow)
    }

    /// Whether the farm can currently mint the reward token.
    pub fn can_mint_rewards(env: Env) -> Result<bool, ContractError> {
        let pool = Self::load_pool(&env)?;
        Ok(ledger::holds_mint_authority(&env, &pool.reward_token))
    }

    pub fn is_initialized(env: Env) -> bool {
        registry::has_pool(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Self::load_pool(&env).map(|pool| pool.admin)
    }

    /// Get the pending admin address, if any.
    pub fn get_pending_admin(env: Env) -> Option<Address> {
        registry::get_pending_admin(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn load_pool(env: &Env) -> Result<PoolState, ContractError> {
        registry::get_pool(env).ok_or(ContractError::NotInitialized)
    }

    /// Guard: revert if `caller` is not the pool admin.
    fn require_admin(pool: &PoolState, caller: &Address) -> Result<(), ContractError> {
        if *caller != pool.admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn require_rate_in_range(rate: i128) -> Result<(), ContractError> {
        if !(MIN_REWARD_PER_BLOCK..=MAX_REWARD_PER_BLOCK).contains(&rate) {
            return Err(ContractError::RewardOutOfRange);
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
