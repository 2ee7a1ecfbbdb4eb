extern crate std;

use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::{
    ContractError, TokenFarmContract, TokenFarmContractClient, DEFAULT_REWARD_PER_BLOCK, SCALE,
};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, TokenFarmContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(TokenFarmContract, ());
    let client = TokenFarmContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(
        &admin,
        &stake_token.address(),
        &reward_token.address(),
        &DEFAULT_REWARD_PER_BLOCK,
    );

    (env, client, admin)
}

// ── Two-step transfer ────────────────────────────────────────────────────────

#[test]
fn test_propose_and_accept_admin() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    assert_eq!(client.get_pending_admin(), Some(successor.clone()));
    // Nothing changes until the successor accepts.
    assert_eq!(client.get_admin(), admin);

    client.accept_admin(&successor);
    assert_eq!(client.get_admin(), successor);
    assert_eq!(client.get_pending_admin(), None);
}

#[test]
fn test_new_admin_gains_and_old_admin_loses_privileges() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    client.accept_admin(&successor);

    client.set_reward_per_block(&successor, &(2 * SCALE));
    assert_eq!(client.reward_per_block(), 2 * SCALE);

    match client.try_set_reward_per_block(&admin, &SCALE) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    match client.try_distribute_rewards_all(&admin) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_propose_by_non_admin_fails() {
    let (env, client, _admin) = setup();
    let intruder = Address::generate(&env);

    match client.try_propose_admin(&intruder, &intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_pending_admin(), None);
}

#[test]
fn test_accept_by_wrong_address_fails() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);
    let intruder = Address::generate(&env);

    client.propose_admin(&admin, &successor);

    match client.try_accept_admin(&intruder) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (env, client, _admin) = setup();

    match client.try_accept_admin(&Address::generate(&env)) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingAdmin),
        _ => unreachable!("Expected NoPendingAdmin error"),
    }
}

#[test]
fn test_cancel_admin_transfer() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    client.cancel_admin_transfer(&admin);
    assert_eq!(client.get_pending_admin(), None);

    match client.try_accept_admin(&successor) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingAdmin),
        _ => unreachable!("Expected NoPendingAdmin error"),
    }

    match client.try_cancel_admin_transfer(&admin) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingAdmin),
        _ => unreachable!("Expected NoPendingAdmin error"),
    }
}

#[test]
fn test_later_proposal_replaces_earlier() {
    let (env, client, admin) = setup();
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.propose_admin(&admin, &first);
    client.propose_admin(&admin, &second);

    match client.try_accept_admin(&first) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    client.accept_admin(&second);
    assert_eq!(client.get_admin(), second);
}
