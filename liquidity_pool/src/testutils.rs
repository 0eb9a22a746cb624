#![cfg(test)]
extern crate std;

use crate::contract::LiquidityPoolArgs;
use crate::{LiquidityPool, LiquidityPoolClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};
use std::vec;

pub(crate) struct TestConfig {
    pub(crate) users_count: u32,
    pub(crate) mint_to_user: i128,
    pub(crate) liq_pool_fee: u32,
}

impl Default for TestConfig {
    fn default() -> Self {
        TestConfig {
            users_count: 2,
            mint_to_user: 1_000_000_0000000,
            liq_pool_fee: 30,
        }
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) users: vec::Vec<Address>,
    pub(crate) token1: TokenClient<'a>,
    pub(crate) token2: TokenClient<'a>,
    pub(crate) liq_pool: LiquidityPoolClient<'a>,
}

impl Default for Setup<'_> {
    /// Create setup from default config and mint tokens for all users
    fn default() -> Self {
        Self::new_with_config(&TestConfig::default())
    }
}

impl Setup<'_> {
    /// Create users, both tokens and the pool; mint and approve tokens for every user
    pub(crate) fn new_with_config(config: &TestConfig) -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let users = Self::generate_random_users(&e, config.users_count);

        let token_admin = Address::generate(&e);
        let token1 = create_token_contract(&e, &token_admin);
        let token2 = create_token_contract(&e, &token_admin);

        let liq_pool = create_liqpool_contract(
            &e,
            &token1.address,
            &token2.address,
            config.liq_pool_fee,
        );

        let setup = Self {
            env: e,
            users,
            token1,
            token2,
            liq_pool,
        };
        setup.mint_tokens_for_users(config.mint_to_user);
        setup
    }

    pub(crate) fn generate_random_users(e: &Env, users_count: u32) -> vec::Vec<Address> {
        let mut users = vec![];
        for _c in 0..users_count {
            users.push(Address::generate(e));
        }
        users
    }

    pub(crate) fn mint_tokens_for_users(&self, amount: i128) {
        for user in self.users.iter() {
            for token in [&self.token1, &self.token2] {
                StellarAssetClient::new(&self.env, &token.address).mint(user, &amount);
                assert_eq!(token.balance(user), amount);
                token.approve(user, &self.liq_pool.address, &amount, &99999);
            }
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

pub fn create_liqpool_contract<'a>(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
    fee_fraction: u32,
) -> LiquidityPoolClient<'a> {
    LiquidityPoolClient::new(
        e,
        &e.register(
            LiquidityPool {},
            LiquidityPoolArgs::__constructor(token_a, token_b, &fee_fraction),
        ),
    )
}
