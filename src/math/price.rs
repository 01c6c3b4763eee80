// Q64.64 sqrt-price <-> human price conversions
// ---------------------------------------------
// Pools store price as a Q64.64 fixed-point square root. Conversions here go
// through BigUint for the squaring step so raw values up to 2^128 survive
// without overflow; only the final normalized result drops to f64.
//
// The decimal adjustment is derived strictly from the two assets' decimal
// exponents. No empirically tuned correction factors.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::PlannerError;
use crate::math::tick::{MAX_TICK, MIN_TICK};

/// Fractional bits of the Q64.64 sqrt-price representation.
pub const Q64_RESOLUTION: u32 = 64;

/// Tick base: each tick is a 0.01% price step.
pub const TICK_BASE: f64 = 1.0001;

/// Raw price of one smallest unit of B per smallest unit of A, squared out of
/// the Q64.64 sqrt representation, then adjusted into human units by
/// `10^(decimals_b - decimals_a)`.
pub fn sqrt_price_to_price(sqrt_price_raw: u128, decimals_a: u8, decimals_b: u8) -> f64 {
    let squared = BigUint::from(sqrt_price_raw).pow(2);
    // squared / 2^128, computed in f64 after the exact integer squaring
    let raw = squared.to_f64().unwrap_or(f64::MAX) / 2f64.powi(2 * Q64_RESOLUTION as i32);
    raw * 10f64.powi(decimals_b as i32 - decimals_a as i32)
}

/// Inverse of [`sqrt_price_to_price`] for the raw (decimal-neutral) price:
/// `sqrt(price) * 2^64`, floored.
pub fn price_to_sqrt_price_raw(price: f64) -> Result<u128, PlannerError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(PlannerError::InvalidPrice(price));
    }
    let scaled = (price.sqrt() * 2f64.powi(Q64_RESOLUTION as i32)).floor();
    if scaled >= u128::MAX as f64 {
        return Err(PlannerError::InvalidPrice(price));
    }
    Ok(scaled as u128)
}

/// Tick index addressing `price`: `floor(ln(price) / ln(1.0001))`, clamped to
/// the global tick bounds.
pub fn price_to_tick(price: f64) -> Result<i32, PlannerError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(PlannerError::InvalidPrice(price));
    }
    let tick = (price.ln() / TICK_BASE.ln()).floor();
    Ok((tick as i64).clamp(MIN_TICK as i64, MAX_TICK as i64) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_sqrt_price_is_unit_price() {
        // sqrt price of exactly 1.0 in Q64.64
        let one_x64 = 1u128 << Q64_RESOLUTION;
        let price = sqrt_price_to_price(one_x64, 9, 9);
        assert!((price - 1.0).abs() < 1e-12, "price {}", price);
    }

    #[test]
    fn decimal_adjustment_follows_exponents() {
        let one_x64 = 1u128 << Q64_RESOLUTION;
        // raw price 1.0, A has 9 decimals, B has 6: adjustment is 10^(6-9)
        let price = sqrt_price_to_price(one_x64, 9, 6);
        assert!((price - 1e-3).abs() < 1e-15, "price {}", price);
    }

    #[test]
    fn round_trip_within_epsilon() {
        for price in [0.001, 0.5, 1.0, 3.7, 250.0, 1.0e6] {
            let raw = price_to_sqrt_price_raw(price).unwrap();
            let back = sqrt_price_to_price(raw, 9, 9);
            let rel = (back - price).abs() / price;
            assert!(rel < 1e-9, "price {} came back as {}", price, back);
        }
    }

    #[test]
    fn non_positive_price_is_rejected() {
        assert!(matches!(
            price_to_tick(0.0),
            Err(PlannerError::InvalidPrice(_))
        ));
        assert!(matches!(
            price_to_tick(-1.5),
            Err(PlannerError::InvalidPrice(_))
        ));
        assert!(matches!(
            price_to_sqrt_price_raw(0.0),
            Err(PlannerError::InvalidPrice(_))
        ));
        assert!(matches!(
            price_to_sqrt_price_raw(f64::NAN),
            Err(PlannerError::InvalidPrice(_))
        ));
    }

    #[test]
    fn tick_of_unit_price_is_zero() {
        assert_eq!(price_to_tick(1.0).unwrap(), 0);
    }

    #[test]
    fn tick_grows_with_price() {
        let low = price_to_tick(0.5).unwrap();
        let high = price_to_tick(2.0).unwrap();
        assert!(low < 0);
        assert!(high > 0);
        assert!(low < high);
        // 1.0001^6931 ~ 1.9999...: floor(ln(2)/ln(1.0001)) = 6931
        assert_eq!(high, 6931);
    }

    #[test]
    fn extreme_prices_clamp_to_tick_bounds() {
        assert_eq!(price_to_tick(1e300).unwrap(), MAX_TICK);
        assert_eq!(price_to_tick(1e-300).unwrap(), MIN_TICK);
    }

    #[test]
    fn large_sqrt_price_does_not_overflow() {
        // near the top of the u128 domain
        let raw = u128::MAX;
        let price = sqrt_price_to_price(raw, 9, 9);
        assert!(price.is_finite());
        assert!(price > 1e38);
    }
}
