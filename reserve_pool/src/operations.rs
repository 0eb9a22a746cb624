use crate::constants::FEE_MULTIPLIER;
use crate::errors::PoolError;
use crate::guard::ReentrancyGuard;
use crate::pool::{
    assert_invariant_holds, get_amount_out, get_deposit_amounts, get_deposit_shares,
    get_initial_shares, get_withdraw_amounts,
};
use crate::storage;
use crate::token::{pull, push};
use liquidity_pool_events::{Events as PoolEvents, LiquidityPoolEvents};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::{log, panic_with_error, Address, Env, Vec};
use token_share::{burn_shares, get_user_balance_shares, mint_shares};

// Stores the token registry and the swap fee. Called once from the owning
// contract's constructor.
//
// # Arguments
//
// * `token_a` - The address of asset A.
// * `token_b` - The address of asset B.
// * `fee_fraction` - The swap fee. 0.01% = 1; 1% = 100; 0.3% = 30
pub fn configure(e: &Env, token_a: &Address, token_b: &Address, fee_fraction: u32) {
    if storage::has_fee_fraction(e) {
        panic_with_error!(e, PoolError::AlreadyConfigured);
    }
    if fee_fraction as u128 > FEE_MULTIPLIER - 1 {
        panic_with_error!(e, LiquidityPoolValidationError::FeeOutOfBounds);
    }

    storage::set_token_a(e, token_a);
    storage::set_token_b(e, token_b);
    storage::set_fee_fraction(e, &fee_fraction);
    storage::put_reserves(e, 0, 0);
}

// Seeds the pool from funds the contract already holds and mints the initial
// shares to `to`. Performs no token transfers.
//
// # Returns
//
// The amount of shares minted: floor(sqrt(amount_a * amount_b)).
pub fn seed(e: &Env, to: &Address, amount_a: u128, amount_b: u128) -> u128 {
    if storage::get_is_initialized(e) {
        panic_with_error!(e, PoolError::AlreadyInitialized);
    }
    if amount_a == 0 || amount_b == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidAmount);
    }

    let shares = get_initial_shares(e, amount_a, amount_b);
    storage::set_is_initialized(e, &true);
    storage::put_reserves(e, amount_a, amount_b);
    mint_shares(e, to, shares);
    log!(e, "pool seeded", amount_a, amount_b, shares);

    let events = PoolEvents::new(e);
    events.deposit_liquidity(to.clone(), amount_a, amount_b, shares);
    events.update_reserves(amount_a, amount_b);

    shares
}

// Seeds the pool with funds pulled from `user`. The only path that creates
// the initial shares for a standalone pool.
pub fn initialize(e: &Env, user: &Address, amount_a: u128, amount_b: u128) -> u128 {
    let guard = ReentrancyGuard::acquire(e);

    let shares = seed(e, user, amount_a, amount_b);

    pull(e, &storage::get_token_a(e), user, amount_a);
    pull(e, &storage::get_token_b(e), user, amount_b);

    guard.release();
    shares
}

// Sells `in_amount` of the asset at `in_idx` for the other one.
//
// # Arguments
//
// * `user` - The trader.
// * `in_idx` - 0 to sell asset A, 1 to sell asset B.
// * `in_amount` - The amount sold.
// * `out_min` - The minimum amount of the bought asset to receive.
//
// # Returns
//
// The amount of the bought asset sent to the trader.
pub fn swap(e: &Env, user: &Address, in_idx: u32, in_amount: u128, out_min: u128) -> u128 {
    let guard = ReentrancyGuard::acquire(e);

    if in_idx > 1 {
        panic_with_error!(e, LiquidityPoolValidationError::InTokenOutOfBounds);
    }
    if in_amount == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidAmount);
    }
    if !storage::get_is_initialized(e) {
        panic_with_error!(e, LiquidityPoolValidationError::EmptyPool);
    }

    let (reserve_a, reserve_b) = storage::get_reserves(e);
    let (reserve_sell, reserve_buy) = if in_idx == 0 {
        (reserve_a, reserve_b)
    } else {
        (reserve_b, reserve_a)
    };
    if reserve_sell == 0 || reserve_buy == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::EmptyPool);
    }

    let (out, fee) = get_amount_out(
        e,
        in_amount,
        reserve_sell,
        reserve_buy,
        storage::get_fee_fraction(e),
    );
    if out == 0 || out >= reserve_buy {
        panic_with_error!(e, PoolError::InvariantViolation);
    }
    if out < out_min {
        panic_with_error!(e, LiquidityPoolValidationError::SlippageExceeded);
    }

    let new_reserve_sell = reserve_sell + in_amount;
    let new_reserve_buy = reserve_buy - out;
    assert_invariant_holds(
        e,
        (reserve_sell, reserve_buy),
        (new_reserve_sell, new_reserve_buy),
    );

    let (token_a, token_b) = (storage::get_token_a(e), storage::get_token_b(e));
    let (token_sell, token_buy) = if in_idx == 0 {
        storage::put_reserves(e, new_reserve_sell, new_reserve_buy);
        (token_a, token_b)
    } else {
        storage::put_reserves(e, new_reserve_buy, new_reserve_sell);
        (token_b, token_a)
    };

    // state is committed, settle with the token contracts
    pull(e, &token_sell, user, in_amount);
    push(e, &token_buy, user, out);

    let (reserve_a, reserve_b) = storage::get_reserves(e);
    let events = PoolEvents::new(e);
    events.trade(user.clone(), token_sell, token_buy, in_amount, out, fee);
    events.update_reserves(reserve_a, reserve_b);

    guard.release();
    out
}

// Quote for `swap` with the current reserves and fee.
pub fn estimate_swap(e: &Env, in_idx: u32, in_amount: u128) -> u128 {
    if in_idx > 1 {
        panic_with_error!(e, LiquidityPoolValidationError::InTokenOutOfBounds);
    }

    let (reserve_a, reserve_b) = storage::get_reserves(e);
    let (reserve_sell, reserve_buy) = if in_idx == 0 {
        (reserve_a, reserve_b)
    } else {
        (reserve_b, reserve_a)
    };
    if reserve_sell == 0 || reserve_buy == 0 {
        return 0;
    }

    get_amount_out(
        e,
        in_amount,
        reserve_sell,
        reserve_buy,
        storage::get_fee_fraction(e),
    )
    .0
}

// Adds liquidity at the current reserve ratio. The excess side is clipped and
// never pulled from the user. A pool drained by withdrawals is seeded again at
// the ratio of the desired amounts.
//
// # Returns
//
// A tuple of the amounts actually deposited and the amount of shares minted.
pub fn add_liquidity(
    e: &Env,
    user: &Address,
    desired_a: u128,
    desired_b: u128,
    min_shares: u128,
) -> (Vec<u128>, u128) {
    let guard = ReentrancyGuard::acquire(e);

    if desired_a == 0 || desired_b == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidAmount);
    }
    if !storage::get_is_initialized(e) {
        panic_with_error!(e, LiquidityPoolValidationError::EmptyPool);
    }

    let (reserve_a, reserve_b) = storage::get_reserves(e);
    let total_shares = token_share::get_total_shares(e);
    let (amount_a, amount_b, shares) = if total_shares == 0 {
        (
            desired_a,
            desired_b,
            get_initial_shares(e, desired_a, desired_b),
        )
    } else {
        if reserve_a == 0 || reserve_b == 0 {
            panic_with_error!(e, LiquidityPoolValidationError::EmptyPool);
        }
        let (amount_a, amount_b) =
            get_deposit_amounts(e, desired_a, desired_b, reserve_a, reserve_b);
        let shares = get_deposit_shares(e, amount_a, amount_b, reserve_a, reserve_b, total_shares);
        (amount_a, amount_b, shares)
    };
    if shares == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidAmount);
    }
    if shares < min_shares {
        panic_with_error!(e, LiquidityPoolValidationError::SlippageExceeded);
    }

    storage::put_reserves(e, reserve_a + amount_a, reserve_b + amount_b);
    mint_shares(e, user, shares);

    pull(e, &storage::get_token_a(e), user, amount_a);
    pull(e, &storage::get_token_b(e), user, amount_b);

    let events = PoolEvents::new(e);
    events.deposit_liquidity(user.clone(), amount_a, amount_b, shares);
    events.update_reserves(reserve_a + amount_a, reserve_b + amount_b);

    guard.release();
    (Vec::from_array(e, [amount_a, amount_b]), shares)
}

// Burns `share_amount` of the user's shares and pays out the proportional
// part of both reserves.
//
// # Returns
//
// The amounts of asset A and asset B withdrawn.
pub fn remove_liquidity(
    e: &Env,
    user: &Address,
    share_amount: u128,
    min_a: u128,
    min_b: u128,
) -> Vec<u128> {
    let guard = ReentrancyGuard::acquire(e);

    if share_amount == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidAmount);
    }
    if get_user_balance_shares(e, user) < share_amount {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientBalance);
    }

    let (reserve_a, reserve_b) = storage::get_reserves(e);
    let total_shares = token_share::get_total_shares(e);
    let (out_a, out_b) = get_withdraw_amounts(e, share_amount, reserve_a, reserve_b, total_shares);
    if out_a < min_a || out_b < min_b {
        panic_with_error!(e, LiquidityPoolValidationError::SlippageExceeded);
    }

    burn_shares(e, user, share_amount);
    storage::put_reserves(e, reserve_a - out_a, reserve_b - out_b);

    push(e, &storage::get_token_a(e), user, out_a);
    push(e, &storage::get_token_b(e), user, out_b);

    let events = PoolEvents::new(e);
    events.withdraw_liquidity(user.clone(), out_a, out_b, share_amount);
    events.update_reserves(reserve_a - out_a, reserve_b - out_b);

    guard.release();
    Vec::from_array(e, [out_a, out_b])
}

pub fn transfer_shares(e: &Env, from: &Address, to: &Address, amount: u128) {
    if amount == 0 {
        panic_with_error!(e, LiquidityPoolValidationError::InvalidAmount);
    }
    token_share::transfer_shares(e, from, to, amount);
    PoolEvents::new(e).transfer_shares(from.clone(), to.clone(), amount);
}

pub fn get_tokens(e: &Env) -> Vec<Address> {
    Vec::from_array(e, [storage::get_token_a(e), storage::get_token_b(e)])
}

pub fn get_reserves(e: &Env) -> Vec<u128> {
    let (reserve_a, reserve_b) = storage::get_reserves(e);
    Vec::from_array(e, [reserve_a, reserve_b])
}

pub fn get_fee_fraction(e: &Env) -> u32 {
    storage::get_fee_fraction(e)
}

pub fn get_total_shares(e: &Env) -> u128 {
    token_share::get_total_shares(e)
}

pub fn balance(e: &Env, user: &Address) -> u128 {
    get_user_balance_shares(e, user)
}

pub fn is_initialized(e: &Env) -> bool {
    storage::get_is_initialized(e)
}
