use crate::math_errors::MathError;
use soroban_sdk::{panic_with_error, U256};

pub trait ExtraMath {
    fn sqrt(&self) -> Self;
}

impl ExtraMath for U256 {
    fn sqrt(&self) -> U256 {
        // babylonian method, converges from above
        let e = self.env();
        let two = U256::from_u32(e, 2);

        let mut z = (self.add(&U256::from_u32(e, 1))).div(&two);

        let mut y = self.clone();

        while z < y {
            y = z.clone();
            z = (self.div(&z).add(&z)).div(&two);
        }

        y
    }
}

// Narrow a 256-bit intermediate back to u128 or fail with a stable error code.
pub fn to_u128(value: &U256) -> u128 {
    match value.to_u128() {
        Some(v) => v,
        None => panic_with_error!(value.env(), MathError::NumberOverflow),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_sqrt_floors() {
        let e = Env::default();
        for (value, expected) in [(0u128, 0u128), (1, 1), (3, 1), (4, 2), (99, 9), (100, 10)] {
            assert_eq!(
                U256::from_u128(&e, value).sqrt(),
                U256::from_u128(&e, expected)
            );
        }
    }

    #[test]
    fn test_sqrt_of_large_product() {
        let e = Env::default();
        let a = U256::from_u128(&e, 500_000_000_000_000_000);
        let b = U256::from_u128(&e, 2_000_000_000_000_000_000);
        // sqrt(5e17 * 2e18) = 1e18
        assert_eq!(to_u128(&a.mul(&b).sqrt()), 1_000_000_000_000_000_000);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #510)")]
    fn test_to_u128_overflow() {
        let e = Env::default();
        let big = U256::from_u128(&e, u128::MAX).mul(&U256::from_u32(&e, 2));
        to_u128(&big);
    }
}
