use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Deadline,
    TotalDepositedA,
    TotalDepositedB,
    Finalized,
    SeededShares,
    UnclaimedShares,
    DepositorsCount,
    Depositor(u32),
    Deposit(Address),
    Slices(Address),
    Claimed(Address),
}

// Contribution of a single depositor, accumulated over all of their deposits.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct DepositorRecord {
    pub amount_a: u128,
    pub amount_b: u128,
}

// Position of a deposit within the running round totals: it moved them
// from (start_a, start_b) to (start_a + amount_a, start_b + amount_b).
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DepositSlice {
    pub start_a: u128,
    pub start_b: u128,
    pub amount_a: u128,
    pub amount_b: u128,
}

generate_instance_storage_getter_and_setter!(deadline, DataKey::Deadline, u64);
generate_instance_storage_getter_and_setter_with_default!(
    total_deposited_a,
    DataKey::TotalDepositedA,
    u128,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    total_deposited_b,
    DataKey::TotalDepositedB,
    u128,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    is_finalized,
    DataKey::Finalized,
    bool,
    false
);
// shares minted when the pool was seeded on finalize
generate_instance_storage_getter_and_setter_with_default!(
    seeded_shares,
    DataKey::SeededShares,
    u128,
    0
);
// part of the seeded shares still held by the contract for depositors
generate_instance_storage_getter_and_setter_with_default!(
    unclaimed_shares,
    DataKey::UnclaimedShares,
    u128,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    depositors_count,
    DataKey::DepositorsCount,
    u32,
    0
);

pub fn get_depositor(e: &Env, index: u32) -> Option<Address> {
    let key = DataKey::Depositor(index);
    let depositor = e.storage().persistent().get(&key);
    if depositor.is_some() {
        bump_persistent(e, &key);
    }
    depositor
}

// Registers a depositor under the next index, in order of the first deposit.
pub fn add_depositor(e: &Env, user: &Address) {
    let index = get_depositors_count(e);
    let key = DataKey::Depositor(index);
    e.storage().persistent().set(&key, user);
    bump_persistent(e, &key);
    set_depositors_count(e, &(index + 1));
}

pub fn get_deposit(e: &Env, user: &Address) -> Option<DepositorRecord> {
    let key = DataKey::Deposit(user.clone());
    let record = e.storage().persistent().get(&key);
    if record.is_some() {
        bump_persistent(e, &key);
    }
    record
}

pub fn put_deposit(e: &Env, user: &Address, record: &DepositorRecord) {
    let key = DataKey::Deposit(user.clone());
    e.storage().persistent().set(&key, record);
    bump_persistent(e, &key);
}

pub fn get_slices(e: &Env, user: &Address) -> Vec<DepositSlice> {
    let key = DataKey::Slices(user.clone());
    match e.storage().persistent().get(&key) {
        Some(v) => {
            bump_persistent(e, &key);
            v
        }
        None => Vec::new(e),
    }
}

pub fn put_slices(e: &Env, user: &Address, slices: &Vec<DepositSlice>) {
    let key = DataKey::Slices(user.clone());
    e.storage().persistent().set(&key, slices);
    bump_persistent(e, &key);
}

pub fn is_claimed(e: &Env, user: &Address) -> bool {
    let key = DataKey::Claimed(user.clone());
    let claimed = e.storage().persistent().get(&key).unwrap_or(false);
    if claimed {
        bump_persistent(e, &key);
    }
    claimed
}

pub fn set_claimed(e: &Env, user: &Address) {
    let key = DataKey::Claimed(user.clone());
    e.storage().persistent().set(&key, &true);
    bump_persistent(e, &key);
}
