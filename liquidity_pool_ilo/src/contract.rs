use crate::distribution::{claim_shares, get_pending_shares, record_slice};
use crate::errors::IloError;
use crate::events::{Events as IloEvents, FundraisingEvents};
use crate::interface::{FundraisingTrait, LiquidityPoolTrait};
use crate::storage::{
    add_depositor, get_deadline, get_deposit, get_depositor, get_depositors_count,
    get_is_finalized, get_total_deposited_a, get_total_deposited_b, get_unclaimed_shares,
    put_deposit, set_deadline, set_is_finalized, set_seeded_shares, set_total_deposited_a,
    set_total_deposited_b, set_unclaimed_shares, DepositorRecord,
};
use liquidity_pool_validation_errors::LiquidityPoolValidationError;
use reserve_pool::guard::ReentrancyGuard;
use reserve_pool::token::pull;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, panic_with_error, Address, Bytes, Env, Vec,
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Fundraising round seeding a constant product AMM"
);

#[contract]
pub struct LiquidityPoolIlo;

// Finalize preconditions, evaluated against a single clock reading.
fn is_ready_to_finalize(e: &Env, now: u64) -> bool {
    !get_is_finalized(e)
        && now >= get_deadline(e)
        && (get_total_deposited_a(e) > 0 || get_total_deposited_b(e) > 0)
}

#[contractimpl]
impl LiquidityPoolIlo {
    // Opens the round.
    //
    // # Arguments
    //
    // * `token_a` - The address of asset A.
    // * `token_b` - The address of asset B.
    // * `fee_fraction` - The swap fee of the pool seeded on finalize. 0.3% = 30
    // * `duration` - Seconds from now until the round can be finalized.
    pub fn __constructor(
        e: Env,
        token_a: Address,
        token_b: Address,
        fee_fraction: u32,
        duration: u64,
    ) {
        reserve_pool::configure(&e, &token_a, &token_b, fee_fraction);
        set_deadline(&e, &e.ledger().timestamp().saturating_add(duration));
        set_is_finalized(&e, &false);
    }
}

#[contractimpl]
impl FundraisingTrait for LiquidityPoolIlo {
    // Deposits tokens into the round.
    //
    // # Arguments
    //
    // * `user` - The depositor.
    // * `amount_a` - The amount of asset A to contribute, may be zero.
    // * `amount_b` - The amount of asset B to contribute, may be zero.
    fn deposit(e: Env, user: Address, amount_a: u128, amount_b: u128) {
        user.require_auth();
        let guard = ReentrancyGuard::acquire(&e);

        if amount_a == 0 && amount_b == 0 {
            panic_with_error!(&e, LiquidityPoolValidationError::InvalidAmount);
        }
        if get_is_finalized(&e) {
            panic_with_error!(&e, IloError::RoundClosed);
        }

        let record = match get_deposit(&e, &user) {
            Some(record) => record,
            None => {
                add_depositor(&e, &user);
                DepositorRecord::default()
            }
        };
        record_slice(&e, &user, amount_a, amount_b);
        put_deposit(
            &e,
            &user,
            &DepositorRecord {
                amount_a: record.amount_a + amount_a,
                amount_b: record.amount_b + amount_b,
            },
        );
        set_total_deposited_a(&e, &(get_total_deposited_a(&e) + amount_a));
        set_total_deposited_b(&e, &(get_total_deposited_b(&e) + amount_b));

        // contribution is recorded, take custody of the funds
        let tokens = reserve_pool::get_tokens(&e);
        pull(&e, &tokens.get_unchecked(0), &user, amount_a);
        pull(&e, &tokens.get_unchecked(1), &user, amount_b);

        IloEvents::new(&e).deposit(user, amount_a, amount_b);
        guard.release();
    }

    fn check_upkeep(e: Env, _check_data: Bytes) -> (bool, Bytes) {
        (
            is_ready_to_finalize(&e, e.ledger().timestamp()),
            Bytes::new(&e),
        )
    }

    // Finalizes the round. Anyone may call it; it succeeds at most once.
    fn perform_upkeep(e: Env, _perform_data: Bytes) {
        if get_is_finalized(&e) {
            panic_with_error!(&e, IloError::RoundClosed);
        }
        if !is_ready_to_finalize(&e, e.ledger().timestamp()) {
            panic_with_error!(&e, IloError::FundRaisingNotOver);
        }
        let guard = ReentrancyGuard::acquire(&e);

        set_is_finalized(&e, &true);

        let (total_a, total_b) = (get_total_deposited_a(&e), get_total_deposited_b(&e));
        let this = e.current_contract_address();
        let total_shares = reserve_pool::seed(&e, &this, total_a, total_b);
        set_seeded_shares(&e, &total_shares);
        set_unclaimed_shares(&e, &total_shares);
        log!(&e, "fund raising finalized", total_a, total_b, total_shares);

        IloEvents::new(&e).finalize(total_a, total_b, total_shares);
        guard.release();
    }

    fn claim_shares(e: Env, user: Address) -> u128 {
        claim_shares(&e, &e.current_contract_address(), &user)
    }

    fn get_pending_shares(e: Env, user: Address) -> u128 {
        get_pending_shares(&e, &user)
    }

    fn get_deadline(e: Env) -> u64 {
        get_deadline(&e)
    }

    fn is_finalized(e: Env) -> bool {
        get_is_finalized(&e)
    }

    fn get_total_deposited(e: Env) -> Vec<u128> {
        Vec::from_array(
            &e,
            [get_total_deposited_a(&e), get_total_deposited_b(&e)],
        )
    }

    fn get_deposit(e: Env, user: Address) -> DepositorRecord {
        get_deposit(&e, &user).unwrap_or_default()
    }

    fn get_depositors_count(e: Env) -> u32 {
        get_depositors_count(&e)
    }

    fn get_depositor(e: Env, index: u32) -> Option<Address> {
        get_depositor(&e, index)
    }
}

// Pool served by the contract once the round is finalized.
// Before that every trading call fails with EmptyPool.
#[contractimpl]
impl LiquidityPoolTrait for LiquidityPoolIlo {
    fn swap(e: Env, user: Address, in_idx: u32, in_amount: u128, out_min: u128) -> u128 {
        user.require_auth();
        reserve_pool::swap(&e, &user, in_idx, in_amount, out_min)
    }

    fn estimate_swap(e: Env, in_idx: u32, in_amount: u128) -> u128 {
        reserve_pool::estimate_swap(&e, in_idx, in_amount)
    }

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

    fn remove_liquidity(
        e: Env,
        user: Address,
        share_amount: u128,
        min_a: u128,
        min_b: u128,
    ) -> Vec<u128> {
        user.require_auth();
        claim_shares(&e, &e.current_contract_address(), &user);
        reserve_pool::remove_liquidity(&e, &user, share_amount, min_a, min_b)
    }

    fn transfer_shares(e: Env, from: Address, to: Address, amount: u128) {
        from.require_auth();
        claim_shares(&e, &e.current_contract_address(), &from);
        reserve_pool::transfer_shares(&e, &from, &to, amount);
    }

    // Includes shares owed from the round and not claimed yet.
    fn balance(e: Env, user: Address) -> u128 {
        let balance = reserve_pool::balance(&e, &user);
        if user == e.current_contract_address() {
            return balance - get_unclaimed_shares(&e);
        }
        balance + get_pending_shares(&e, &user)
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
        reserve_pool::get_fee_fraction(&e)
    }
}
