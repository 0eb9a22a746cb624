#![no_std]

pub mod constants;
pub mod errors;
pub mod guard;
pub mod operations;
pub mod pool;
pub mod storage;
pub mod token;

pub use operations::{
    add_liquidity, balance, configure, estimate_swap, get_fee_fraction, get_reserves,
    get_tokens, get_total_shares, initialize, is_initialized, remove_liquidity, seed, swap,
    transfer_shares,
};
