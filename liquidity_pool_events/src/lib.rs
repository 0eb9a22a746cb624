#![no_std]

use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }
}

// Events emitted by every reserve-changing operation of a two-asset pool.
// Amounts are published as i128 to match the token interface.
pub trait LiquidityPoolEvents {
    fn deposit_liquidity(
        &self,
        provider: Address,
        amount_a: u128,
        amount_b: u128,
        share_amount: u128,
    );

    fn withdraw_liquidity(
        &self,
        provider: Address,
        amount_a: u128,
        amount_b: u128,
        share_amount: u128,
    );

    fn trade(
        &self,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        out_amount: u128,
        fee_amount: u128,
    );

    fn update_reserves(&self, reserve_a: u128, reserve_b: u128);

    fn transfer_shares(&self, from: Address, to: Address, share_amount: u128);
}

impl LiquidityPoolEvents for Events {
    fn deposit_liquidity(
        &self,
        provider: Address,
        amount_a: u128,
        amount_b: u128,
        share_amount: u128,
    ) {
        // topics
        // [
        //   "deposit_liquidity": Symbol, // event identifier
        //   provider: Address,           // receiver of the minted shares
        // ]
        //
        // body
        // [
        //   share_amount: i128, // amount of pool shares minted
        //   amountA: i128,      // asset A added to the reserves
        //   amountB: i128       // asset B added to the reserves
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "deposit_liquidity"), provider),
            (share_amount as i128, amount_a as i128, amount_b as i128),
        );
    }

    fn withdraw_liquidity(
        &self,
        provider: Address,
        amount_a: u128,
        amount_b: u128,
        share_amount: u128,
    ) {
        // body
        // [
        //   share_amount: i128, // amount of pool shares burned
        //   amountA: i128,      // asset A paid out of the reserves
        //   amountB: i128       // asset B paid out of the reserves
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "withdraw_liquidity"), provider),
            (share_amount as i128, amount_a as i128, amount_b as i128),
        );
    }

    fn trade(
        &self,
        user: Address,
        token_in: Address,
        token_out: Address,
        in_amount: u128,
        out_amount: u128,
        fee_amount: u128,
    ) {
        // topics
        // [
        //   "trade": Symbol,       // event identifier
        //   sold_asset: Address,   // asset sent to the pool
        //   bought_asset: Address, // asset received from the pool
        //   trader: Address
        // ]
        // body
        // [
        //   sold_amount: i128,
        //   bought_amount: i128,
        //   fee: i128            // part of sold_amount left in the reserves
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "trade"), token_in, token_out, user),
            (in_amount as i128, out_amount as i128, fee_amount as i128),
        );
    }

    fn update_reserves(&self, reserve_a: u128, reserve_b: u128) {
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "update_reserves"),),
            (reserve_a as i128, reserve_b as i128),
        );
    }

    fn transfer_shares(&self, from: Address, to: Address, share_amount: u128) {
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "transfer_shares"), from, to),
            share_amount as i128,
        );
    }
}
