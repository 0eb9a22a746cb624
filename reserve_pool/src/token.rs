use soroban_sdk::token::TokenClient as Client;
use soroban_sdk::{Address, Env};

// Pulls `amount` from `from` into the current contract.
// Relies on a prior `approve` made by `from` for this contract.
pub fn pull(e: &Env, token: &Address, from: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    let this = e.current_contract_address();
    Client::new(e, token).transfer_from(&this, from, &this, &(amount as i128));
}

pub fn push(e: &Env, token: &Address, to: &Address, amount: u128) {
    if amount == 0 {
        return;
    }
    Client::new(e, token).transfer(&e.current_contract_address(), to, &(amount as i128));
}
