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

pub trait FundraisingEvents {
    fn deposit(&self, user: Address, amount_a: u128, amount_b: u128);

    fn credit_shares(&self, user: Address, share_amount: u128);

    fn finalize(&self, total_a: u128, total_b: u128, total_shares: u128);
}

impl FundraisingEvents for Events {
    fn deposit(&self, user: Address, amount_a: u128, amount_b: u128) {
        // topics
        // [
        //   "ilo_deposit": Symbol, // event identifier
        //   depositor: Address,
        // ]
        //
        // body
        // [
        //   amountA: i128, // amount of asset A contributed with this deposit
        //   amountB: i128  // amount of asset B contributed with this deposit
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "ilo_deposit"), user),
            (amount_a as i128, amount_b as i128),
        );
    }

    fn credit_shares(&self, user: Address, share_amount: u128) {
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "ilo_credit_shares"), user),
            share_amount as i128,
        );
    }

    fn finalize(&self, total_a: u128, total_b: u128, total_shares: u128) {
        // topics
        // [
        //   "ilo_finalize": Symbol, // event identifier
        // ]
        //
        // body
        // [
        //   totalA: i128,      // asset A raised, seeded into the pool
        //   totalB: i128,      // asset B raised, seeded into the pool
        //   totalShares: i128  // shares minted and distributed to depositors
        // ]
        let e = self.env();
        e.events().publish(
            (Symbol::new(e, "ilo_finalize"),),
            (total_a as i128, total_b as i128, total_shares as i128),
        );
    }
}
