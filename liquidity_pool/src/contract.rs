use crate::pool_interface::LiquidityPoolTrait;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Symbol, Vec};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Constant product AMM with configurable swap fee"
);

#[contract]
pub struct LiquidityPool;

#[contractimpl]
impl LiquidityPool {
    // Fixes the asset pair and the swap fee for the lifetime of the pool.
    //
    // # Arguments
    //
    // * `token_a` - The address of asset A.
    // * `token_b` - The address of asset B.
    // * `fee_fraction` - The fee fraction for the pool. 0.01% = 1; 1% = 100; 0.3% = 30
    pub fn __constructor(e: Env, token_a: Address, token_b: Address, fee_fraction: u32) {
        reserve_pool::configure(&e, &token_a, &token_b, fee_fraction);
    }
}

#[contractimpl]
impl LiquidityPoolTrait for LiquidityPool {
    fn pool_type(e: Env) -> Symbol {
        Symbol::new(&e, "constant_product")
    }

    // Seeds the pool.
    //
    // # Arguments
    //
    // * `user` - The first liquidity provider, receives the initial shares.
    // * `amount_a` - The amount of asset A to seed with.
    // * `amount_b` - The amount of asset B to seed with.
    //
    // # Returns
    //
    // The amount of shares minted.
    fn initialize(e: Env, user: Address, amount_a: u128, amount_b: u128) -> u128 {
        user.require_auth();
        reserve_pool::initialize(&e, &user, amount_a, amount_b)
    }

    // Swaps tokens in the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the user swapping the tokens.
    // * `in_idx` - The index of the input token to be swapped.
    // * `in_amount` - The amount of the input token to be swapped.
    // * `out_min` - The minimum amount of the output token to be received.
    //
    // # Returns
    //
    // The amount of the output token received.
    fn swap(e: Env, user: Address, in_idx: u32, in_amount: u128, out_min: u128) -> u128 {
        user.require_auth();
        reserve_pool::swap(&e, &user, in_idx, in_amount, out_min)
    }

    fn estimate_swap(e: Env, in_idx: u32, in_amount: u128) -> u128 {
        reserve_pool::estimate_swap(&e, in_idx, in_amount)
    }

    // Deposits tokens into the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the user depositing the tokens.
    // * `amount_a` - The desired amount of asset A.
    // * `amount_b` - The desired amount of asset B.
    // * `min_shares` - The minimum amount of shares to mint.
    //
    // # Returns
    //
    // A tuple containing a vector of actual amounts deposited and the amount of shares minted.
    fn add_liquidity(
        e: Env,
        user: Address,
        amount_a: u128,
        amount_b: u128,
        min_shares: u128,
    ) -> (Vec<u128>, u128) {
        user.require_auth();
        reserve_pool::add_liquidity(&e, &user, amount_a, amount_b, min_shares)
    }

    // Withdraws tokens from the pool.
    //
    // # Arguments
    //
    // * `user` - The address of the user withdrawing the tokens.
    // * `share_amount` - The amount of shares to burn.
    // * `min_a` - The minimum amount of asset A to receive.
    // * `min_b` - The minimum amount of asset B to receive.
    //
    // # Returns
    //
    // A vector of actual amounts of each token withdrawn.
    fn remove_liquidity(
        e: Env,
        user: Address,
        share_amount: u128,
        min_a: u128,
        min_b: u128,
    ) -> Vec<u128> {
        user.require_auth();
        reserve_pool::remove_liquidity(&e, &user, share_amount, min_a, min_b)
    }

    fn transfer_shares(e: Env, from: Address, to: Address, amount: u128) {
        from.require_auth();
        reserve_pool::transfer_shares(&e, &from, &to, amount);
    }

    fn balance(e: Env, user: Address) -> u128 {
        reserve_pool::balance(&e, &user)
    }

    fn get_total_shares(e: Env) -> u128 {
        reserve_pool::get_total_shares(&e)
    }

    fn get_tokens(e: Env) -> Vec<Address> {
        reserve_pool::get_tokens(&e)
    }

    fn get_reserves(e: Env) -> Vec<u128> {
        reserve_pool::get_reserves(&e)
    }

    fn get_fee_fraction(e: Env) -> u32 {
        // returns fee fraction. 0.01% = 1; 1% = 100; 0.3% = 30
        reserve_pool::get_fee_fraction(&e)
    }

    fn is_initialized(e: Env) -> bool {
        reserve_pool::is_initialized(&e)
    }
}
