use crate::constants::FEE_MULTIPLIER;
use crate::errors::PoolError;
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{panic_with_error, Env, U256};
use utils::u256_math::{to_u128, ExtraMath};

// Shares minted on pool seeding: floor(sqrt(a * b)).
pub fn get_initial_shares(e: &Env, amount_a: u128, amount_b: u128) -> u128 {
    // if .mul doesn't fail, sqrt won't either
    to_u128(
        &U256::from_u128(e, amount_a)
            .mul(&U256::from_u128(e, amount_b))
            .sqrt(),
    )
}

// Amounts actually consumed from a two-sided deposit at the current reserve ratio.
// The side in excess is clipped; nothing is taken beyond what the ratio needs.
pub fn get_deposit_amounts(
    e: &Env,
    desired_a: u128,
    desired_b: u128,
    reserve_a: u128,
    reserve_b: u128,
) -> (u128, u128) {
    let amount_b = desired_a.fixed_mul_floor(e, &reserve_b, &reserve_a);
    if amount_b <= desired_b {
        if amount_b == 0 {
            panic_with_error!(e, LiquidityPoolValidationError::RatioMismatch);
        }
        (desired_a, amount_b)
    } else {
        let amount_a = desired_b.fixed_mul_floor(e, &reserve_a, &reserve_b);
        if amount_a == 0 || amount_a > desired_a {
            panic_with_error!(e, LiquidityPoolValidationError::RatioMismatch);
        }
        (amount_a, desired_b)
    }
}

// shares = total_shares * min(amount_a / reserve_a, amount_b / reserve_b)
pub fn get_deposit_shares(
    e: &Env,
    amount_a: u128,
    amount_b: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> u128 {
    let shares_a = amount_a.fixed_mul_floor(e, &total_shares, &reserve_a);
    let shares_b = amount_b.fixed_mul_floor(e, &total_shares, &reserve_b);
    shares_a.min(shares_b)
}

pub fn get_withdraw_amounts(
    e: &Env,
    share_amount: u128,
    reserve_a: u128,
    reserve_b: u128,
    total_shares: u128,
) -> (u128, u128) {
    (
        reserve_a.fixed_mul_floor(e, &share_amount, &total_shares),
        reserve_b.fixed_mul_floor(e, &share_amount, &total_shares),
    )
}

// Returns (amount_out, fee). The fee is taken on input and stays in the reserves.
pub fn get_amount_out(
    e: &Env,
    in_amount: u128,    // dx - exact tokens the trader sells
    reserve_sell: u128, // x
    reserve_buy: u128,  // y
    fee_fraction: u32,
) -> (u128, u128) {
    if in_amount == 0 {
        return (0, 0);
    }

    let in_after_fee = in_amount * (FEE_MULTIPLIER - fee_fraction as u128) / FEE_MULTIPLIER;
    // dy = floor(y * dx' / (x + dx')), rounded toward the pool.
    // The form y - floor(x * y / (x + dx')) rounds up and lets k drop when the fee is zero.
    let out = in_after_fee.fixed_mul_floor(e, &reserve_buy, &(reserve_sell + in_after_fee));
    (out, in_amount - in_after_fee)
}

// Aborts unless reserve_a * reserve_b did not decrease.
pub fn assert_invariant_holds(
    e: &Env,
    old_reserves: (u128, u128),
    new_reserves: (u128, u128),
) {
    let old_k = U256::from_u128(e, old_reserves.0).mul(&U256::from_u128(e, old_reserves.1));
    let new_k = U256::from_u128(e, new_reserves.0).mul(&U256::from_u128(e, new_reserves.1));
    if new_k < old_k {
        panic_with_error!(e, PoolError::InvariantViolation);
    }
}
