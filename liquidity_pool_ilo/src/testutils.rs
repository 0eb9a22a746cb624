#![cfg(test)]
extern crate std;

use crate::contract::LiquidityPoolIloArgs;
use crate::{LiquidityPoolIlo, LiquidityPoolIloClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};
use std::vec;

pub(crate) struct TestConfig {
    pub(crate) users_count: u32,
    pub(crate) mint_to_user: i128,
    pub(crate) fee_fraction: u32,
    pub(crate) duration: u64,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            users_count: 3,
            mint_to_user: 1_000_000_000_000_000_000_000_000,
            fee_fraction: 30,
            duration: 100,
        }
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) users: vec::Vec<Address>,
    pub(crate) token_a: TokenClient<'a>,
    pub(crate) token_b: TokenClient<'a>,
    pub(crate) ilo: LiquidityPoolIloClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        Self::new_with_config(&TestConfig::default())
    }
}

impl Setup<'_> {
    /// Create users, both tokens and the fundraising contract; mint and approve tokens for every user
    pub(crate) fn new_with_config(config: &TestConfig) -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let mut users = vec![];
        for _c in 0..config.users_count {
            users.push(Address::generate(&e));
        }

        let token_admin = Address::generate(&e);
        let token_a = create_token_contract(&e, &token_admin);
        let token_b = create_token_contract(&e, &token_admin);

        let ilo = create_ilo_contract(
            &e,
            &token_a.address,
            &token_b.address,
            config.fee_fraction,
            config.duration,
        );

        for user in users.iter() {
            for token in [&token_a, &token_b] {
                StellarAssetClient::new(&e, &token.address).mint(user, &config.mint_to_user);
                token.approve(user, &ilo.address, &config.mint_to_user, &99999);
            }
        }

        Self {
            env: e,
            users,
            token_a,
            token_b,
            ilo,
        }
    }
}

pub fn create_token_contract<'a>(e: &Env, admin: &Address) -> TokenClient<'a> {
    TokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub fn create_ilo_contract<'a>(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
    fee_fraction: u32,
    duration: u64,
) -> LiquidityPoolIloClient<'a> {
    LiquidityPoolIloClient::new(
        e,
        &e.register(
            LiquidityPoolIlo {},
            LiquidityPoolIloArgs::__constructor(token_a, token_b, &fee_fraction, &duration),
        ),
    )
}
