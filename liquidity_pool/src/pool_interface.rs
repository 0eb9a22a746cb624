use soroban_sdk::{Address, Env, Symbol, Vec};

pub trait LiquidityPoolTrait {
    // Get symbolic explanation of pool type.
    fn pool_type(e: Env) -> Symbol;

    // Seeds the reserves with the user's funds and mints floor(sqrt(a * b)) shares to the user.
    // Can be called only once per pool.
    fn initialize(e: Env, user: Address, amount_a: u128, amount_b: u128) -> u128;

    // Perform an exchange between the two assets.
    // in_idx: index of token to send, 0 for A and 1 for B
    // in_amount: Amount of token in being exchanged
    // out_min: Minimum amount of token out to receive
    // Returns the actual amount of token out received
    fn swap(e: Env, user: Address, in_idx: u32, in_amount: u128, out_min: u128) -> u128;

    // Estimate amount of tokens to retrieve using swap function
    fn estimate_swap(e: Env, in_idx: u32, in_amount: u128) -> u128;

    // Deposits both assets at the current reserve ratio. The excess of one side is not taken.
    // Returns the amounts actually deposited and the amount of shares minted.
    fn add_liquidity(
        e: Env,
        user: Address,
        amount_a: u128,
        amount_b: u128,
        min_shares: u128,
    ) -> (Vec<u128>, u128);

    // Burns share_amount of user's shares and sends the corresponding part of the reserves.
    // Returns amounts of tokens withdrawn
    fn remove_liquidity(
        e: Env,
        user: Address,
        share_amount: u128,
        min_a: u128,
        min_b: u128,
    ) -> Vec<u128>;

    fn transfer_shares(e: Env, from: Address, to: Address, amount: u128);

    // Share balance of the holder
    fn balance(e: Env, user: Address) -> u128;

    // Returns the total amount of shares
    fn get_total_shares(e: Env) -> u128;

    fn get_tokens(e: Env) -> Vec<Address>;

    // Get pool reserves
    fn get_reserves(e: Env) -> Vec<u128>;

    // Fee fraction getter. 1 = 0.01%
    fn get_fee_fraction(e: Env) -> u32;

    fn is_initialized(e: Env) -> bool;
}
