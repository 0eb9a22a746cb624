use crate::events::{Events as IloEvents, FundraisingEvents};
use crate::storage::{
    get_is_finalized, get_seeded_shares, get_slices, get_total_deposited_a,
    get_total_deposited_b, get_unclaimed_shares, is_claimed, put_slices, set_claimed,
    set_unclaimed_shares, DepositSlice,
};
use soroban_sdk::{log, Address, Env, U256};
use token_share::transfer_shares;
use utils::u256_math::to_u128;

// Shares owed up to the point (paid_a, paid_b) of the running round totals,
// valued at the seeding price B/A:
// floor(total_shares * (paid_a * B + paid_b * A) / (2 * A * B))
fn get_cumulative_entitlement(
    e: &Env,
    paid_a: u128,
    paid_b: u128,
    total_a: u128,
    total_b: u128,
    total_shares: u128,
) -> u128 {
    let value = U256::from_u128(e, paid_a)
        .mul(&U256::from_u128(e, total_b))
        .add(&U256::from_u128(e, paid_b).mul(&U256::from_u128(e, total_a)));
    let total_value = U256::from_u128(e, total_a)
        .mul(&U256::from_u128(e, total_b))
        .mul(&U256::from_u32(e, 2));

    to_u128(
        &value
            .mul(&U256::from_u128(e, total_shares))
            .div(&total_value),
    )
}

// Both ends of a slice are floored, so the slices of a finished round add up
// to `total_shares` exactly: the sum telescopes from (0, 0) to (A, B).
pub fn get_slice_entitlement(
    e: &Env,
    slice: &DepositSlice,
    total_a: u128,
    total_b: u128,
    total_shares: u128,
) -> u128 {
    let end = get_cumulative_entitlement(
        e,
        slice.start_a + slice.amount_a,
        slice.start_b + slice.amount_b,
        total_a,
        total_b,
        total_shares,
    );
    let start = get_cumulative_entitlement(
        e,
        slice.start_a,
        slice.start_b,
        total_a,
        total_b,
        total_shares,
    );
    end - start
}

// Appends a deposit made at the current round totals. A deposit following the
// user's previous one with nobody in between extends that slice.
pub fn record_slice(e: &Env, user: &Address, amount_a: u128, amount_b: u128) {
    let (start_a, start_b) = (get_total_deposited_a(e), get_total_deposited_b(e));
    let mut slices = get_slices(e, user);

    let last_idx = slices.len().saturating_sub(1);
    match slices.last() {
        Some(last)
            if last.start_a + last.amount_a == start_a
                && last.start_b + last.amount_b == start_b =>
        {
            slices.set(
                last_idx,
                DepositSlice {
                    start_a: last.start_a,
                    start_b: last.start_b,
                    amount_a: last.amount_a + amount_a,
                    amount_b: last.amount_b + amount_b,
                },
            );
        }
        _ => slices.push_back(DepositSlice {
            start_a,
            start_b,
            amount_a,
            amount_b,
        }),
    }
    put_slices(e, user, &slices);
}

// Shares the user is owed from the seeded pool and has not claimed yet.
pub fn get_pending_shares(e: &Env, user: &Address) -> u128 {
    if !get_is_finalized(e) || is_claimed(e, user) {
        return 0;
    }

    let (total_a, total_b) = (get_total_deposited_a(e), get_total_deposited_b(e));
    let total_shares = get_seeded_shares(e);
    let mut pending = 0;
    for slice in get_slices(e, user).iter() {
        pending += get_slice_entitlement(e, &slice, total_a, total_b, total_shares);
    }
    pending
}

// Moves the pending shares of `user` from `holder` into the user's balance.
// Does nothing before finalize, for non-depositors, or on a repeated claim.
pub fn claim_shares(e: &Env, holder: &Address, user: &Address) -> u128 {
    if !get_is_finalized(e) || get_slices(e, user).is_empty() || is_claimed(e, user) {
        return 0;
    }

    let amount = get_pending_shares(e, user);
    set_claimed(e, user);
    set_unclaimed_shares(e, &(get_unclaimed_shares(e) - amount));
    if amount > 0 {
        transfer_shares(e, holder, user, amount);
    }

    IloEvents::new(e).credit_shares(user.clone(), amount);
    log!(e, "shares claimed", user.clone(), amount);
    amount
}
