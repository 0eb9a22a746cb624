#![cfg(test)]
extern crate std;

use crate::testutils::{create_liqpool_contract, create_token_contract, Setup, TestConfig};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, Error};
use utils::test_utils::assert_approx_eq_abs;

const INITIAL_LIQUIDITY: u128 = 1000_0000000;

fn seeded_setup<'a>(fee: u32) -> Setup<'a> {
    let setup = Setup::new_with_config(&TestConfig {
        liq_pool_fee: fee,
        ..TestConfig::default()
    });
    setup
        .liq_pool
        .initialize(&setup.users[0], &INITIAL_LIQUIDITY, &INITIAL_LIQUIDITY);
    setup
}

#[test]
fn test_initialize() {
    let setup = Setup::default();
    let mint_to_user = TestConfig::default().mint_to_user;
    let user1 = setup.users[0].clone();
    let liq_pool = setup.liq_pool;

    assert_eq!(liq_pool.is_initialized(), false);
    assert_eq!(
        liq_pool.initialize(&user1, &INITIAL_LIQUIDITY, &INITIAL_LIQUIDITY),
        INITIAL_LIQUIDITY
    );
    assert_eq!(liq_pool.is_initialized(), true);
    assert_eq!(liq_pool.get_total_shares(), INITIAL_LIQUIDITY);
    assert_eq!(liq_pool.balance(&user1), INITIAL_LIQUIDITY);
    assert_eq!(
        liq_pool.get_reserves(),
        vec![&setup.env, INITIAL_LIQUIDITY, INITIAL_LIQUIDITY]
    );
    assert_eq!(
        setup.token1.balance(&user1),
        mint_to_user - INITIAL_LIQUIDITY as i128
    );
    assert_eq!(
        setup.token2.balance(&liq_pool.address),
        INITIAL_LIQUIDITY as i128
    );
}

#[test]
fn test_initialize_unbalanced_mints_sqrt() {
    let setup = Setup::default();
    assert_eq!(setup.liq_pool.initialize(&setup.users[0], &400, &900), 600);
    assert_eq!(setup.liq_pool.get_total_shares(), 600);
}

#[test]
fn test_initialize_twice() {
    let setup = seeded_setup(30);
    assert_eq!(
        setup
            .liq_pool
            .try_initialize(&setup.users[1], &100, &100)
            .unwrap_err(),
        Ok(Error::from_contract_error(201))
    );
}

#[test]
fn test_initialize_zero_amount() {
    let setup = Setup::default();
    assert_eq!(
        setup
            .liq_pool
            .try_initialize(&setup.users[0], &0, &100)
            .unwrap_err(),
        Ok(Error::from_contract_error(2018))
    );
    assert_eq!(setup.liq_pool.is_initialized(), false);
}

#[test]
#[should_panic]
fn test_fee_out_of_bounds() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let token1 = create_token_contract(&e, &admin);
    let token2 = create_token_contract(&e, &admin);
    create_liqpool_contract(&e, &token1.address, &token2.address, 10_000);
}

#[test]
fn test_swap() {
    let setup = seeded_setup(30);
    let mint_to_user = TestConfig::default().mint_to_user;
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    let swap_in_amount = 1_0000000_u128;
    let expected_swap_result = 9960069_u128;

    assert_eq!(
        liq_pool.estimate_swap(&0, &swap_in_amount),
        expected_swap_result
    );
    assert_eq!(
        liq_pool.swap(&user2, &0, &swap_in_amount, &expected_swap_result),
        expected_swap_result
    );
    assert_eq!(
        liq_pool.get_reserves(),
        vec![
            &setup.env,
            INITIAL_LIQUIDITY + swap_in_amount,
            INITIAL_LIQUIDITY - expected_swap_result
        ]
    );
    assert_eq!(
        setup.token1.balance(&user2),
        mint_to_user - swap_in_amount as i128
    );
    assert_eq!(
        setup.token2.balance(&user2),
        mint_to_user + expected_swap_result as i128
    );
    assert_eq!(
        setup.token1.balance(&liq_pool.address),
        (INITIAL_LIQUIDITY + swap_in_amount) as i128
    );
    assert_eq!(
        setup.token2.balance(&liq_pool.address),
        (INITIAL_LIQUIDITY - expected_swap_result) as i128
    );
    // allowance spent by the pool
    assert_eq!(
        setup.token1.allowance(&user2, &liq_pool.address),
        mint_to_user - swap_in_amount as i128
    );
}

#[test]
fn test_swap_b_to_a() {
    let setup = seeded_setup(30);
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    assert_eq!(liq_pool.swap(&user2, &1, &1_0000000, &0), 9960069);
    assert_eq!(
        liq_pool.get_reserves(),
        vec![
            &setup.env,
            INITIAL_LIQUIDITY - 9960069,
            INITIAL_LIQUIDITY + 1_0000000
        ]
    );
}

#[test]
fn test_swap_round_trip_loses_fee() {
    let setup = seeded_setup(30);
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    let amount_in = 1_0000000_u128;
    let amount_b = liq_pool.swap(&user2, &0, &amount_in, &0);
    let amount_a = liq_pool.swap(&user2, &1, &amount_b, &0);
    assert_eq!(amount_b, 9960069);
    assert_eq!(amount_a, 9940147);
    assert!(amount_a < amount_in);
}

#[test]
fn test_swap_round_trip_without_fee() {
    let setup = seeded_setup(0);
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    let amount_in = 1_0000000_u128;
    let amount_b = liq_pool.swap(&user2, &0, &amount_in, &0);
    let amount_a = liq_pool.swap(&user2, &1, &amount_b, &0);
    assert!(amount_a <= amount_in);
}

#[test]
fn test_swap_never_decreases_product() {
    let setup = seeded_setup(30);
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    let product = |reserves: soroban_sdk::Vec<u128>| {
        reserves.get(0).unwrap() * reserves.get(1).unwrap()
    };
    let mut last_k = product(liq_pool.get_reserves());
    for (in_idx, in_amount) in [
        (0_u32, 1_0000000_u128),
        (1, 123_4567890),
        (0, 7),
        (1, 3_3333333),
        (0, 999_9999999),
    ] {
        liq_pool.swap(&user2, &in_idx, &in_amount, &0);
        let k = product(liq_pool.get_reserves());
        assert!(k >= last_k);
        last_k = k;
    }
}

#[test]
fn test_swap_errors() {
    let setup = seeded_setup(30);
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    assert_eq!(
        liq_pool.try_swap(&user2, &0, &0, &0).unwrap_err(),
        Ok(Error::from_contract_error(2018))
    );
    assert_eq!(
        liq_pool.try_swap(&user2, &2, &100, &0).unwrap_err(),
        Ok(Error::from_contract_error(2008))
    );
    assert_eq!(
        liq_pool
            .try_swap(&user2, &0, &1_0000000, &9960070)
            .unwrap_err(),
        Ok(Error::from_contract_error(2006))
    );
    // fee eats the whole input, nothing to pay out
    assert_eq!(
        liq_pool.try_swap(&user2, &0, &1, &0).unwrap_err(),
        Ok(Error::from_contract_error(204))
    );
    // failed swaps leave the pool untouched
    assert_eq!(
        liq_pool.get_reserves(),
        vec![&setup.env, INITIAL_LIQUIDITY, INITIAL_LIQUIDITY]
    );
}

#[test]
fn test_swap_empty_pool() {
    let setup = Setup::default();
    assert_eq!(
        setup
            .liq_pool
            .try_swap(&setup.users[0], &0, &100, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(2010))
    );
    assert_eq!(setup.liq_pool.estimate_swap(&0, &100), 0);
}

#[test]
fn test_add_liquidity_partial_fill() {
    let setup = Setup::default();
    let mint_to_user = TestConfig::default().mint_to_user;
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    // pool at 1:2
    let total_shares = liq_pool.initialize(&user1, &1000_0000000, &2000_0000000);
    assert_eq!(total_shares, 14142135623);

    let (amounts, shares) = liq_pool.add_liquidity(&user2, &100_0000000, &500_0000000, &0);
    assert_eq!(amounts, vec![&setup.env, 100_0000000, 200_0000000]);
    assert_eq!(shares, 1414213562);
    assert_eq!(liq_pool.balance(&user2), shares);
    assert_eq!(liq_pool.get_total_shares(), total_shares + shares);
    // excess of asset B was never taken
    assert_eq!(setup.token2.balance(&user2), mint_to_user - 200_0000000);
    assert_eq!(
        liq_pool.get_reserves(),
        vec![&setup.env, 1100_0000000, 2200_0000000]
    );
}

#[test]
fn test_add_then_remove_liquidity() {
    let setup = seeded_setup(30);
    let mint_to_user = TestConfig::default().mint_to_user;
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    let (amounts, shares) = liq_pool.add_liquidity(&user2, &12_3456789, &12_3456789, &0);
    let withdrawn = liq_pool.remove_liquidity(&user2, &shares, &0, &0);

    assert_approx_eq_abs(withdrawn.get(0).unwrap(), amounts.get(0).unwrap(), 1);
    assert_approx_eq_abs(withdrawn.get(1).unwrap(), amounts.get(1).unwrap(), 1);
    assert_eq!(liq_pool.balance(&user2), 0);
    assert_eq!(liq_pool.get_total_shares(), INITIAL_LIQUIDITY);
    assert!(setup.token1.balance(&user2) <= mint_to_user);
    assert!(setup.token1.balance(&user2) >= mint_to_user - 1);
}

#[test]
fn test_add_liquidity_errors() {
    let setup = Setup::default();
    let user1 = setup.users[0].clone();
    let liq_pool = setup.liq_pool;

    assert_eq!(
        liq_pool
            .try_add_liquidity(&user1, &100, &100, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(2010))
    );

    liq_pool.initialize(&user1, &INITIAL_LIQUIDITY, &INITIAL_LIQUIDITY);

    assert_eq!(
        liq_pool
            .try_add_liquidity(&user1, &0, &100, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(2018))
    );
    assert_eq!(
        liq_pool
            .try_add_liquidity(&user1, &100, &100, &101)
            .unwrap_err(),
        Ok(Error::from_contract_error(2006))
    );
}

#[test]
fn test_remove_liquidity_errors() {
    let setup = seeded_setup(30);
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    assert_eq!(
        liq_pool
            .try_remove_liquidity(&user2, &1, &0, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(2019))
    );
    assert_eq!(
        liq_pool
            .try_remove_liquidity(&user1, &0, &0, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(2018))
    );
    assert_eq!(
        liq_pool
            .try_remove_liquidity(&user1, &100, &101, &0)
            .unwrap_err(),
        Ok(Error::from_contract_error(2006))
    );
    assert_eq!(liq_pool.balance(&user1), INITIAL_LIQUIDITY);
}

#[test]
fn test_remove_all_liquidity() {
    let setup = seeded_setup(30);
    let mint_to_user = TestConfig::default().mint_to_user;
    let user1 = setup.users[0].clone();
    let liq_pool = setup.liq_pool;

    assert_eq!(
        liq_pool.remove_liquidity(
            &user1,
            &INITIAL_LIQUIDITY,
            &INITIAL_LIQUIDITY,
            &INITIAL_LIQUIDITY
        ),
        vec![&setup.env, INITIAL_LIQUIDITY, INITIAL_LIQUIDITY]
    );
    assert_eq!(liq_pool.get_total_shares(), 0);
    assert_eq!(liq_pool.get_reserves(), vec![&setup.env, 0, 0]);
    assert_eq!(setup.token1.balance(&user1), mint_to_user);
    assert_eq!(
        liq_pool.try_swap(&user1, &0, &100, &0).unwrap_err(),
        Ok(Error::from_contract_error(2010))
    );
}

#[test]
fn test_drained_pool_is_seeded_again() {
    let setup = seeded_setup(30);
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    liq_pool.remove_liquidity(&user1, &INITIAL_LIQUIDITY, &0, &0);
    assert_eq!(liq_pool.get_total_shares(), 0);

    // any ratio is accepted, shares are minted as on the first seeding
    let (amounts, shares) =
        liq_pool.add_liquidity(&user2, &100_0000000, &400_0000000, &2_000_000_000);
    assert_eq!(amounts, vec![&setup.env, 100_0000000, 400_0000000]);
    assert_eq!(shares, 2_000_000_000);
    assert_eq!(liq_pool.balance(&user2), shares);
    assert_eq!(liq_pool.get_total_shares(), shares);
    assert_eq!(
        liq_pool.get_reserves(),
        vec![&setup.env, 100_0000000, 400_0000000]
    );

    // back in business: trades and proportional deposits work again
    assert!(liq_pool.swap(&user1, &0, &1_0000000, &0) > 0);
    let (_, shares) = liq_pool.add_liquidity(&user1, &10_0000000, &100_0000000, &0);
    assert!(shares > 0);
    assert_eq!(
        liq_pool.balance(&user1) + liq_pool.balance(&user2),
        liq_pool.get_total_shares()
    );
}

#[test]
fn test_transfer_shares() {
    let setup = seeded_setup(30);
    let user1 = setup.users[0].clone();
    let user2 = setup.users[1].clone();
    let liq_pool = setup.liq_pool;

    liq_pool.transfer_shares(&user1, &user2, &(INITIAL_LIQUIDITY / 4));
    assert_eq!(liq_pool.balance(&user1), INITIAL_LIQUIDITY / 4 * 3);
    assert_eq!(liq_pool.balance(&user2), INITIAL_LIQUIDITY / 4);
    assert_eq!(
        liq_pool.balance(&user1) + liq_pool.balance(&user2),
        liq_pool.get_total_shares()
    );

    let withdrawn = liq_pool.remove_liquidity(&user2, &(INITIAL_LIQUIDITY / 4), &0, &0);
    assert_eq!(
        withdrawn,
        vec![&setup.env, INITIAL_LIQUIDITY / 4, INITIAL_LIQUIDITY / 4]
    );

    assert_eq!(
        liq_pool
            .try_transfer_shares(&user2, &user1, &1)
            .unwrap_err(),
        Ok(Error::from_contract_error(2019))
    );
}
