//! Calls into the stake and reward token contracts.
//!
//! Every call goes through the `try_` client variant so a token-side
//! failure surfaces as a farm error instead of aborting the invocation with
//! the token's own error code.

use soroban_sdk::{token, Address, Env};

use crate::ContractError;

/// Pulls `amount` stake tokens from `from` into the farm. The farm acts as
/// spender, so `from` must have approved at least `amount` beforehand.
pub fn pull_stake(
    env: &Env,
    stake_token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let farm = env.current_contract_address();
    match token::Client::new(env, stake_token).try_transfer_from(&farm, from, &farm, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::InsufficientAllowanceOrBalance),
    }
}

/// Returns `amount` stake tokens held by the farm to `to`.
pub fn push_stake(
    env: &Env,
    stake_token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let farm = env.current_contract_address();
    match token::Client::new(env, stake_token).try_transfer(&farm, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::InsufficientAllowanceOrBalance),
    }
}

/// Mints `amount` reward tokens to `to`. Requires the farm to be the reward
/// token's admin.
pub fn mint_reward(
    env: &Env,
    reward_token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    match token::StellarAssetClient::new(env, reward_token).try_mint(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(ContractError::RewardMintFailed),
    }
}

/// Whether the farm currently holds mint authority over `reward_token`.
pub fn holds_mint_authority(env: &Env, reward_token: &Address) -> bool {
    match token::StellarAssetClient::new(env, reward_token).try_admin() {
        Ok(Ok(admin)) => admin == env.current_contract_address(),
        _ => false,
    }
}
