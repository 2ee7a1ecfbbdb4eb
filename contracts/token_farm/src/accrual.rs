//! Reward accrual math.
//!
//! These functions never touch storage or token contracts. The `Env` is
//! only needed for host-side 256-bit arithmetic when an intermediate product
//! does not fit in `i128`.

use soroban_sdk::{Env, I256};

use crate::ContractError;

/// Number of ledgers between two checkpoints. Zero if the clock has not
/// advanced past `from`.
pub fn elapsed_blocks(from: u32, to: u32) -> u32 {
    to.saturating_sub(from)
}

/// Reward owed to a single participant for `elapsed_blocks` ledgers:
///
/// `floor(reward_per_block * elapsed_blocks * participant_stake / total_staked)`
///
/// Returns zero when either stake is zero. The truncated remainder is not
/// redistributed.
pub fn compute_accrual(
    env: &Env,
    participant_stake: i128,
    total_staked: i128,
    reward_per_block: i128,
    elapsed_blocks: u32,
) -> Result<i128, ContractError> {
    if total_staked <= 0 || participant_stake <= 0 {
        return Ok(0);
    }
    if reward_per_block <= 0 || elapsed_blocks == 0 {
        return Ok(0);
    }

    let elapsed = i128::from(elapsed_blocks);
    let product = reward_per_block
        .checked_mul(elapsed)
        .and_then(|emitted| emitted.checked_mul(participant_stake));

    match product {
        Some(product) => Ok(product / total_staked),
        None => {
            let emitted =
                I256::from_i128(env, reward_per_block).mul(&I256::from_i128(env, elapsed));
            emitted
                .mul(&I256::from_i128(env, participant_stake))
                .div(&I256::from_i128(env, total_staked))
                .to_i128()
                .ok_or(ContractError::ArithmeticOverflow)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SCALE;

    #[test]
    fn zero_total_staked_accrues_nothing() {
        let env = Env::default();
        assert_eq!(compute_accrual(&env, 100, 0, SCALE, 10), Ok(0));
    }

    #[test]
    fn zero_participant_stake_accrues_nothing() {
        let env = Env::default();
        assert_eq!(compute_accrual(&env, 0, 1_000, SCALE, 10), Ok(0));
    }

    #[test]
    fn zero_elapsed_accrues_nothing() {
        let env = Env::default();
        assert_eq!(compute_accrual(&env, 500, 1_000, SCALE, 0), Ok(0));
    }

    #[test]
    fn sole_staker_receives_full_emission() {
        let env = Env::default();
        assert_eq!(compute_accrual(&env, 42, 42, 7, 3), Ok(21));
    }

    #[test]
    fn shares_follow_stake_ratio() {
        let env = Env::default();
        let total = 150 * SCALE;
        let a = compute_accrual(&env, 100 * SCALE, total, SCALE, 3).unwrap();
        let b = compute_accrual(&env, 50 * SCALE, total, SCALE, 3).unwrap();

        // 3 blocks × 1 token: 2 tokens to the larger stake, 1 to the smaller.
        assert_eq!(a, 2 * SCALE);
        assert_eq!(b, SCALE);
    }

    #[test]
    fn truncation_dust_is_dropped() {
        let env = Env::default();
        // 10 units over three equal stakers: 3 each, 1 unit of dust.
        let each = compute_accrual(&env, 1, 3, 10, 1).unwrap();
        assert_eq!(each, 3);
        assert_eq!(10 - 3 * each, 1);
    }

    #[test]
    fn wide_intermediate_product_falls_back_to_i256() {
        let env = Env::default();
        let stake = 1_000_000_000_000 * SCALE;
        let total = 2 * stake;
        // rate × elapsed × stake overflows i128; the share itself does not.
        let accrued = compute_accrual(&env, stake, total, 10 * SCALE, 1_000).unwrap();
        assert_eq!(accrued, 5_000 * SCALE);
    }

    #[test]
    fn elapsed_blocks_saturates() {
        assert_eq!(elapsed_blocks(10, 15), 5);
        assert_eq!(elapsed_blocks(15, 15), 0);
        assert_eq!(elapsed_blocks(20, 15), 0);
    }
}
