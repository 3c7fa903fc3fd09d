// src/math.rs
use ethereum_types::{U256, U512};
use crate::shared::errors::MathError;

/// Basis points in 100%
pub const BPS_DENOMINATOR: u32 = 10_000;

/// `floor(value * numerator / denominator)` with a 512-bit intermediate
pub fn mul_div_floor(value: U256, numerator: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::Overflow);
    }
    let product = value.full_mul(numerator);
    U256::try_from(product / U512::from(denominator)).map_err(|_| MathError::Overflow)
}

/// `ceil(value * numerator / denominator)` with a 512-bit intermediate
pub fn mul_div_ceil(value: U256, numerator: U256, denominator: U256) -> Result<U256, MathError> {
    if denominator.is_zero() {
        return Err(MathError::Overflow);
    }
    let product = value.full_mul(numerator);
    let denominator = U512::from(denominator);
    let mut quotient = product / denominator;
    if !(product % denominator).is_zero() {
        quotient = quotient + U512::one();
    }
    U256::try_from(quotient).map_err(|_| MathError::Overflow)
}

/// Calculate minimum output amount with slippage protection.
/// Slippage above 100% leaves nothing to protect, so the bound saturates at zero.
pub fn calculate_min_out(amount_out: U256, slippage_bps: u32) -> U256 {
    let keep_bps = BPS_DENOMINATOR.saturating_sub(slippage_bps);
    // keep_bps <= 10000, so the result is never larger than amount_out
    mul_div_floor(amount_out, U256::from(keep_bps), U256::from(BPS_DENOMINATOR))
        .unwrap_or_default()
}

/// Calculate maximum input amount with slippage protection
pub fn calculate_max_in(amount_in: U256, slippage_bps: u32) -> Result<U256, MathError> {
    let allow_bps = U256::from(BPS_DENOMINATOR) + U256::from(slippage_bps);
    mul_div_ceil(amount_in, allow_bps, U256::from(BPS_DENOMINATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_min_out() {
        let min_out = calculate_min_out(U256::from(100u64), 100); // 1% slippage
        assert_eq!(min_out, U256::from(99u64));

        // 101 * 0.995 = 100.495 -> floor
        assert_eq!(calculate_min_out(U256::from(101u64), 50), U256::from(100u64));
        assert_eq!(calculate_min_out(U256::from(100u64), 20_000), U256::zero());
    }

    #[test]
    fn test_calculate_max_in() {
        assert_eq!(calculate_max_in(U256::from(100u64), 100).unwrap(), U256::from(101u64));
        // 101 * 1.005 = 101.505 -> ceil
        assert_eq!(calculate_max_in(U256::from(101u64), 50).unwrap(), U256::from(102u64));
        assert!(calculate_max_in(U256::MAX, 1).is_err());
        assert_eq!(calculate_max_in(U256::MAX, 0).unwrap(), U256::MAX);
    }

    #[test]
    fn test_mul_div_rounding() {
        let seven = U256::from(7u64);
        let two = U256::from(2u64);
        assert_eq!(mul_div_floor(seven, U256::one(), two).unwrap(), U256::from(3u64));
        assert_eq!(mul_div_ceil(seven, U256::one(), two).unwrap(), U256::from(4u64));
        assert!(mul_div_floor(seven, U256::one(), U256::zero()).is_err());
    }
}
