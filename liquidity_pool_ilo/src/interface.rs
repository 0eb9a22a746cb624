use crate::storage::DepositorRecord;
use soroban_sdk::{Address, Bytes, Env, Vec};

pub trait FundraisingTrait {
    // Contributes asset A and/or asset B to the round. Funds are pulled with transfer_from,
    // so the contract must be approved beforehand.
    fn deposit(e: Env, user: Address, amount_a: u128, amount_b: u128);

    // Automation readiness predicate.
    // Returns (upkeep_needed, perform_data); check_data is not used.
    fn check_upkeep(e: Env, check_data: Bytes) -> (bool, Bytes);

    // Automation entrypoint: closes the round and seeds the pool with everything raised.
    // The minted shares stay with the contract until each depositor claims them.
    // perform_data is not used.
    fn perform_upkeep(e: Env, perform_data: Bytes);

    // Moves the user's share of the seeded pool into their balance.
    // Anyone may trigger it; returns the amount credited, 0 if nothing is owed.
    fn claim_shares(e: Env, user: Address) -> u128;

    // Shares owed to the user and not claimed yet
    fn get_pending_shares(e: Env, user: Address) -> u128;

    // Timestamp after which the round can be finalized
    fn get_deadline(e: Env) -> u64;

    fn is_finalized(e: Env) -> bool;

    // Totals raised: [asset A, asset B]
    fn get_total_deposited(e: Env) -> Vec<u128>;

    // Accumulated contribution of the user
    fn get_deposit(e: Env, user: Address) -> DepositorRecord;

    fn get_depositors_count(e: Env) -> u32;

    // Depositors are indexed in order of their first deposit
    fn get_depositor(e: Env, index: u32) -> Option<Address>;
}

pub trait LiquidityPoolTrait {
    // Perform an exchange between the two assets.
    // in_idx: index of token to send, 0 for A and 1 for B
    fn swap(e: Env, user: Address, in_idx: u32, in_amount: u128, out_min: u128) -> u128;

    // Estimate amount of tokens to retrieve using swap function
    fn estimate_swap(e: Env, in_idx: u32, in_amount: u128) -> u128;

    // Deposits both assets at the current reserve ratio.
    // Returns the amounts actually deposited and the amount of shares minted.
    fn add_liquidity(
        e: Env,
        user: Address,
        amount_a: u128,
        amount_b: u128,
        min_shares: u128,
    ) -> (Vec<u128>, u128);

    // Burns shares and sends the corresponding part of the reserves.
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

    fn get_total_shares(e: Env) -> u128;

    fn get_tokens(e: Env) -> Vec<Address>;

    fn get_reserves(e: Env) -> Vec<u128>;

    // Fee fraction getter. 1 = 0.01%
    fn get_fee_fraction(e: Env) -> u32;
}
