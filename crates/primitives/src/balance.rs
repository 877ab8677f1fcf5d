use alloy::primitives::U256;

use fraction::BigUint;

// Raw token units, never negative. Failed reads are represented by zero.
pub type Balance = U256;

pub fn balance_to_big_uint(balance: &Balance) -> BigUint {
    BigUint::from_bytes_be(&balance.to_be_bytes::<32>())
}
