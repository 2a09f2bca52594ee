#![cfg(test)]

use crate::test_helpers::*;
use crate::ContractError;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{Address, Env, FromVal};

#[test]
fn test_yield_disabled() {
    let e = Env::default();
    let pool = setup(&e, 2, 0, false, 0);
    pool.client.deposit(&pool.members.get(0).unwrap(), &100);
    fund_yield(&pool, 50);

    assert_eq!(
        pool.client.try_distribute_yield(&Address::generate(&e), &50),
        Err(Ok(ContractError::YieldDisabled))
    );
}

#[test]
fn test_yield_without_depositors_fails() {
    let e = Env::default();
    let pool = setup(&e, 2, 0, true, 0);
    fund_yield(&pool, 50);

    assert_eq!(
        pool.client.try_distribute_yield(&Address::generate(&e), &50),
        Err(Ok(ContractError::NoDepositors))
    );
}

#[test]
fn test_yield_must_be_held() {
    let e = Env::default();
    let pool = setup(&e, 2, 0, true, 0);
    pool.client.deposit(&pool.members.get(0).unwrap(), &100);
    fund_yield(&pool, 49);

    assert_eq!(
        pool.client.try_distribute_yield(&Address::generate(&e), &50),
        Err(Ok(ContractError::YieldNotHeld))
    );
    assert_eq!(
        pool.client.try_distribute_yield(&Address::generate(&e), &0),
        Err(Ok(ContractError::InvalidAmount))
    );
}

#[test]
fn test_yield_split_pro_rata() {
    let e = Env::default();
    let pool = setup(&e, 3, 0, true, 0);
    let a = pool.members.get(0).unwrap();
    let b = pool.members.get(1).unwrap();
    let idle = pool.members.get(2).unwrap();
    pool.client.deposit(&a, &100);
    pool.client.deposit(&b, &300);
    fund_yield(&pool, 100);

    let distributed = pool.client.distribute_yield(&Address::generate(&e), &100);

    assert_eq!(distributed, 100);
    assert_eq!(pool.client.get_balance(&a), 125);
    assert_eq!(pool.client.get_balance(&b), 375);
    assert_eq!(pool.client.get_balance(&idle), 0);
    assert_eq!(pool.client.get_member(&b).yield_earned, 75);
    assert_eq!(pool.client.get_state().total_balance, 500);
}

#[test]
fn test_yield_shares_ignore_treasury_rate() {
    let e = Env::default();
    let pool = setup(&e, 2, 0, true, 1_000);
    let a = pool.members.get(0).unwrap();
    let b = pool.members.get(1).unwrap();
    pool.client.deposit(&a, &100);
    pool.client.deposit(&b, &100);
    fund_yield(&pool, 100);

    assert_eq!(pool.client.distribute_yield(&Address::generate(&e), &100), 100);

    // floor(100 * 100 / 200) each; nothing goes to the treasury.
    assert_eq!(pool.client.get_balance(&a), 150);
    assert_eq!(pool.client.get_balance(&b), 150);
    assert_eq!(pool.token.balance(&pool.treasury), 0);

    let state = pool.client.get_state();
    assert_eq!(state.yield_distributed, 100);
    assert_eq!(state.yield_dust, 0);
    assert_eq!(pool.token.balance(&pool.contract_id), state.total_balance);
}

#[test]
fn test_rounding_dust_goes_to_treasury() {
    let e = Env::default();
    let pool = setup(&e, 3, 0, true, 0);
    for member in pool.members.iter() {
        pool.client.deposit(&member, &10);
    }
    fund_yield(&pool, 10);

    // floor(10 * 10 / 30) = 3 each, 1 left over.
    let caller = Address::generate(&e);
    assert_eq!(pool.client.distribute_yield(&caller, &10), 9);

    let events = e.events().all();
    let event = events
        .iter()
        .find(|ev| ev.0 == pool.contract_id)
        .unwrap();
    assert_eq!(Address::from_val(&e, &event.1.get(1).unwrap()), caller);
    assert_eq!(<(i128, i128, i128)>::from_val(&e, &event.2), (10, 9, 1));

    let state = pool.client.get_state();
    assert_eq!(state.yield_dust, 1);
    assert_eq!(state.total_balance, 39);
    assert_eq!(pool.token.balance(&pool.treasury), 1);
    assert_eq!(pool.token.balance(&pool.contract_id), state.total_balance);
}

#[test]
fn test_dust_is_not_left_in_the_pool() {
    let e = Env::default();
    let pool = setup(&e, 3, 0, true, 0);
    for member in pool.members.iter() {
        pool.client.deposit(&member, &100);
    }
    let caller = Address::generate(&e);
    fund_yield(&pool, 100);
    assert_eq!(pool.client.distribute_yield(&caller, &100), 99);

    // The leftover unit left with the treasury, so only fresh yield counts.
    assert_eq!(pool.token.balance(&pool.treasury), 1);
    assert_eq!(
        pool.client.try_distribute_yield(&caller, &1),
        Err(Ok(ContractError::YieldNotHeld))
    );

    // 399 * 133 / 399 = 133 for each member; no dust this time.
    fund_yield(&pool, 399);
    assert_eq!(pool.client.distribute_yield(&caller, &399), 399);
    for member in pool.members.iter() {
        assert_eq!(pool.client.get_balance(&member), 266);
    }

    let state = pool.client.get_state();
    assert_eq!(state.yield_distributed, 498);
    assert_eq!(state.yield_dust, 1);
    assert_eq!(pool.token.balance(&pool.contract_id), state.total_balance);
}

#[test]
fn test_surplus_held_by_pool_counts_as_yield() {
    let e = Env::default();
    let pool = setup(&e, 2, 0, true, 0);
    let a = pool.members.get(0).unwrap();
    pool.client.deposit(&a, &100);
    let caller = Address::generate(&e);

    // Two separate transfers reported as a single yield round.
    fund_yield(&pool, 30);
    fund_yield(&pool, 20);
    assert_eq!(pool.client.distribute_yield(&caller, &50), 50);
    assert_eq!(pool.client.get_balance(&a), 150);
    assert_eq!(
        pool.client.try_distribute_yield(&caller, &1),
        Err(Ok(ContractError::YieldNotHeld))
    );
}

#[test]
fn test_yield_is_withdrawable() {
    let e = Env::default();
    let pool = setup(&e, 1, 0, true, 0);
    let member = pool.members.get(0).unwrap();
    pool.client.deposit(&member, &1_000);
    fund_yield(&pool, 250);
    pool.client.distribute_yield(&member, &250);

    assert_eq!(pool.client.withdraw(&member, &1_250), 1_250);
    assert_eq!(pool.token.balance(&member), DEFAULT_MINT + 250);
    assert_eq!(pool.token.balance(&pool.contract_id), 0);
}
