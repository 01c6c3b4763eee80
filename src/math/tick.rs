// Tick codec + range derivation for Q64.64 CLMM pools
// ----------------------------------------------------
// The chain encodes signed tick indices as u32 (two's-complement style); this
// module owns that wire form plus the aligned-range derivation around the
// current tick. Integer math only, no floating point.

use num_integer::Integer;

use crate::error::PlannerError;
use crate::models::TickRange;

/// Global tick bounds for Q64.64 CLMM pools. Every usable tick, and therefore
/// every range bound, lies in `[MIN_TICK, MAX_TICK]`.
pub const MIN_TICK: i32 = -443_636;
pub const MAX_TICK: i32 = 443_636;

/// Wire encoding constants: ticks above `TICK_SIGN_THRESHOLD` decode as
/// negative, offset by `TICK_WIRE_MODULUS`.
pub const TICK_SIGN_THRESHOLD: u32 = i32::MAX as u32; // 2^31 - 1
pub const TICK_WIRE_MODULUS: i64 = 1 << 32;

// --------------------------------- Codec ---------------------------------

/// Encode a signed tick into the unsigned form used by the transaction
/// encoding: non-negative ticks pass through, negative ticks wrap by 2^32.
#[inline]
pub fn encode_tick(tick: i32) -> u32 {
    if tick >= 0 {
        tick as u32
    } else {
        (TICK_WIRE_MODULUS + tick as i64) as u32
    }
}

/// Inverse of [`encode_tick`]: `decode_tick(encode_tick(t)) == t` for every
/// `t` in `[i32::MIN, i32::MAX]`.
#[inline]
pub fn decode_tick(raw: u32) -> i32 {
    if raw > TICK_SIGN_THRESHOLD {
        (raw as i64 - TICK_WIRE_MODULUS) as i32
    } else {
        raw as i32
    }
}

// ----------------------------- Range derivation -----------------------------

/// Compute an aligned, bounds-clamped, non-degenerate tick range centered on
/// `current_tick`, `width_in_spacings` spacing units to each side.
///
/// Both bounds are exact multiples of `tick_spacing` and lie within
/// `[MIN_TICK, MAX_TICK]`. If alignment collapses the range it is widened by
/// one spacing unit, upward when legal (deterministic tie-break), otherwise
/// downward from the lower side.
pub fn compute_range(
    current_tick: i32,
    tick_spacing: u32,
    width_in_spacings: u32,
) -> Result<TickRange, PlannerError> {
    if tick_spacing == 0 || tick_spacing as i64 > (MAX_TICK as i64 - MIN_TICK as i64) {
        return Err(PlannerError::InvalidRange {
            current_tick,
            spacing: tick_spacing,
        });
    }

    let spacing = tick_spacing as i64;
    let half_width = spacing * width_in_spacings as i64;

    // Clamp the raw bounds before alignment so alignment operates on legal ticks.
    let raw_lower = (current_tick as i64 - half_width).clamp(MIN_TICK as i64, MAX_TICK as i64);
    let raw_upper = (current_tick as i64 + half_width).clamp(MIN_TICK as i64, MAX_TICK as i64);

    // Align outward: lower floors, upper ceils.
    let mut lower = raw_lower.div_floor(&spacing) * spacing;
    let mut upper = raw_upper.div_ceil(&spacing) * spacing;

    // Alignment may have pushed a bound past the global limits; pull it back
    // to the nearest on-grid tick inside them.
    if lower < MIN_TICK as i64 {
        lower = (MIN_TICK as i64).div_ceil(&spacing) * spacing;
    }
    if upper > MAX_TICK as i64 {
        upper = (MAX_TICK as i64).div_floor(&spacing) * spacing;
    }

    if lower >= upper {
        if upper + spacing <= MAX_TICK as i64 {
            upper += spacing;
        } else {
            lower -= spacing;
        }
    }

    if lower >= upper || lower < MIN_TICK as i64 || upper > MAX_TICK as i64 {
        return Err(PlannerError::InvalidRange {
            current_tick,
            spacing: tick_spacing,
        });
    }

    Ok(TickRange {
        lower: lower as i32,
        upper: upper as i32,
    })
}

// ------------------------------- Minimal tests -------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_negative_tick_wraps() {
        assert_eq!(encode_tick(-100), 4_294_967_196);
        assert_eq!(decode_tick(4_294_967_196), -100);
    }

    #[test]
    fn encode_non_negative_passes_through() {
        assert_eq!(encode_tick(0), 0);
        assert_eq!(encode_tick(443_636), 443_636);
        assert_eq!(decode_tick(443_636), 443_636);
    }

    #[test]
    fn round_trip_at_signed_extremes() {
        for t in [i32::MIN, -443_636, -1, 0, 1, 443_636, i32::MAX] {
            assert_eq!(decode_tick(encode_tick(t)), t, "tick {}", t);
        }
    }

    #[test]
    fn symmetric_range_around_zero() {
        let r = compute_range(0, 60, 100).unwrap();
        assert_eq!(r.lower, -6000);
        assert_eq!(r.upper, 6000);
    }

    #[test]
    fn unaligned_current_tick_aligns_outward() {
        // current tick off-grid: lower floors, upper ceils
        let r = compute_range(37, 60, 1).unwrap();
        assert_eq!(r.lower, -60); // floor(-23 / 60) * 60
        assert_eq!(r.upper, 120); // ceil(97 / 60) * 60
        assert!(r.lower % 60 == 0 && r.upper % 60 == 0);
    }

    #[test]
    fn clamps_at_upper_bound() {
        let r = compute_range(MAX_TICK, 200, 5).unwrap();
        assert!(r.upper <= MAX_TICK);
        assert!(r.lower < r.upper);
        assert_eq!(r.upper % 200, 0);
        assert_eq!(r.lower % 200, 0);
    }

    #[test]
    fn clamps_at_lower_bound() {
        let r = compute_range(MIN_TICK, 200, 5).unwrap();
        assert!(r.lower >= MIN_TICK);
        assert!(r.lower < r.upper);
        // MIN_TICK is not a multiple of 200; nearest on-grid tick inside is -443_600.
        assert_eq!(r.lower, -443_600);
    }

    #[test]
    fn collapsed_range_widens_upward() {
        // width 0 collapses to a point on-grid; widening prefers the upper side
        let r = compute_range(600, 60, 0).unwrap();
        assert_eq!(r.lower, 600);
        assert_eq!(r.upper, 660);
    }

    #[test]
    fn collapsed_range_at_top_shrinks_lower_side() {
        // on-grid point at the very top of the grid for spacing 2: widening
        // upward would breach MAX_TICK, so the lower side gives way
        let r = compute_range(443_636, 2, 0).unwrap();
        assert_eq!(r.upper, 443_636);
        assert_eq!(r.lower, 443_634);
    }

    #[test]
    fn zero_spacing_is_invalid() {
        assert!(matches!(
            compute_range(0, 0, 1),
            Err(PlannerError::InvalidRange { .. })
        ));
    }

    #[test]
    fn pathological_spacing_is_invalid() {
        assert!(matches!(
            compute_range(0, 1_000_000, 1),
            Err(PlannerError::InvalidRange { .. })
        ));
    }
}
