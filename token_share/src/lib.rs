#![no_std]

// Share ledger kept inside the storage of the contract that owns the pool.
// Sum of all holder balances equals the stored total at every point.

use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};


#[derive(Clone)]
#[contracttype]
enum DataKey {
    TotalShares,
    Balance(Address),
}

pub fn get_total_shares(e: &Env) -> u128 {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

fn put_total_shares(e: &Env, value: u128) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::TotalShares, &value)
}

pub fn get_user_balance_shares(e: &Env, user: &Address) -> u128 {
    let key = DataKey::Balance(user.clone());
    match e.storage().persistent().get::<DataKey, u128>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

fn put_user_balance_shares(e: &Env, user: &Address, amount: u128) {
    let key = DataKey::Balance(user.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

fn spend_shares(e: &Env, from: &Address, amount: u128) {
    let balance = get_user_balance_shares(e, from);
    if balance < amount {
        panic_with_error!(e, LiquidityPoolValidationError::InsufficientBalance);
    }
    put_user_balance_shares(e, from, balance - amount);
}

fn receive_shares(e: &Env, to: &Address, amount: u128) {
    let balance = get_user_balance_shares(e, to);
    put_user_balance_shares(e, to, balance + amount);
}

pub fn mint_shares(e: &Env, to: &Address, amount: u128) {
    put_total_shares(e, get_total_shares(e) + amount);
    receive_shares(e, to, amount);
}

pub fn burn_shares(e: &Env, from: &Address, amount: u128) {
    spend_shares(e, from, amount);
    put_total_shares(e, get_total_shares(e) - amount);
}

pub fn transfer_shares(e: &Env, from: &Address, to: &Address, amount: u128) {
    spend_shares(e, from, amount);
    receive_shares(e, to, amount);
}
