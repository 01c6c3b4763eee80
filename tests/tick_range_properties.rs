// Property-based checks for the tick codec, range derivation, and price
// conversions.

use proptest::prelude::*;

use clmm_zap_planner::math::price::{price_to_sqrt_price_raw, sqrt_price_to_price};
use clmm_zap_planner::math::tick::{
    compute_range, decode_tick, encode_tick, MAX_TICK, MIN_TICK,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// decode(encode(t)) == t across the whole usable tick domain.
    #[test]
    fn prop_tick_codec_round_trip(tick in MIN_TICK..=MAX_TICK) {
        prop_assert_eq!(decode_tick(encode_tick(tick)), tick);
    }

    /// Encoded negative ticks land strictly above the sign threshold.
    #[test]
    fn prop_negative_ticks_encode_high(tick in MIN_TICK..0i32) {
        prop_assert!(encode_tick(tick) > i32::MAX as u32);
    }

    /// Every returned range is ordered, aligned, and inside the global bounds.
    #[test]
    fn prop_range_is_ordered_aligned_and_bounded(
        current_tick in MIN_TICK..=MAX_TICK,
        spacing_idx in 0usize..4,
        width in 1u32..500,
    ) {
        let spacing = [2u32, 10, 60, 200][spacing_idx];
        let range = compute_range(current_tick, spacing, width).unwrap();

        prop_assert!(range.lower < range.upper);
        prop_assert_eq!(range.lower % spacing as i32, 0);
        prop_assert_eq!(range.upper % spacing as i32, 0);
        prop_assert!(range.lower >= MIN_TICK);
        prop_assert!(range.upper <= MAX_TICK);
    }

    /// Away from the bounds the range is symmetric with the requested width.
    #[test]
    fn prop_interior_range_has_requested_width(
        offset in -1000i32..1000,
        width in 1u32..50,
    ) {
        let spacing = 60u32;
        let current = offset * spacing as i32; // on-grid, well inside bounds
        let range = compute_range(current, spacing, width).unwrap();
        prop_assert_eq!(range.width(), 2 * (spacing * width) as i64);
    }

    /// Price -> sqrt-price -> price round trip within a small relative epsilon.
    #[test]
    fn prop_price_round_trip(price in 1e-6f64..1e12) {
        let raw = price_to_sqrt_price_raw(price).unwrap();
        let back = sqrt_price_to_price(raw, 9, 9);
        let rel = (back - price).abs() / price;
        prop_assert!(rel < 1e-6, "price {} came back as {}", price, back);
    }
}
