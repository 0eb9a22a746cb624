use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_has,
    generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    TokenA,
    TokenB,
    ReserveA,
    ReserveB,
    FeeFraction, // 1 = 0.01%
    Initialized,
    Locked,
}

generate_instance_storage_getter_and_setter!(token_a, DataKey::TokenA, Address);
generate_instance_storage_getter_and_setter!(token_b, DataKey::TokenB, Address);
generate_instance_storage_getter_and_setter!(fee_fraction, DataKey::FeeFraction, u32);
generate_instance_storage_has!(fee_fraction, DataKey::FeeFraction);
generate_instance_storage_getter_and_setter_with_default!(reserve_a, DataKey::ReserveA, u128, 0);
generate_instance_storage_getter_and_setter_with_default!(reserve_b, DataKey::ReserveB, u128, 0);
generate_instance_storage_getter_and_setter_with_default!(
    is_initialized,
    DataKey::Initialized,
    bool,
    false
);
generate_instance_storage_getter_and_setter_with_default!(is_locked, DataKey::Locked, bool, false);

pub fn get_reserves(e: &Env) -> (u128, u128) {
    (get_reserve_a(e), get_reserve_b(e))
}

pub fn put_reserves(e: &Env, reserve_a: u128, reserve_b: u128) {
    set_reserve_a(e, &reserve_a);
    set_reserve_b(e, &reserve_b);
}
