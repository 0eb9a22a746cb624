// 0.01% = 1; 1% = 100; 0.3% = 30
pub const FEE_MULTIPLIER: u128 = 10_000;
