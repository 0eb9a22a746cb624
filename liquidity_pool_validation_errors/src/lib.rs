#![no_std]

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LiquidityPoolValidationError {
    FeeOutOfBounds = 2003,
    SlippageExceeded = 2006,
    InTokenOutOfBounds = 2008,
    EmptyPool = 2010,
    RatioMismatch = 2011,
    InvalidAmount = 2018,
    InsufficientBalance = 2019,
}
