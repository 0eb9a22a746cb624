#![no_std]

mod contract;
mod pool_interface;
mod test;
mod testutils;

pub use contract::{LiquidityPool, LiquidityPoolClient};
