#![no_std]

mod contract;
mod distribution;
pub mod errors;
mod events;
mod interface;
mod storage;
mod testutils;

pub use contract::{LiquidityPoolIlo, LiquidityPoolIloClient};
pub use storage::DepositorRecord;
