//! # Delivery Fee Module
//!
//! Tiered delivery fee lookup.
//!
//! ## Tier Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  distance = 1000 m                                                      │
//! │                                                                         │
//! │  [0 ─────── 500]                       no (1000 > 500)                  │
//! │            [500 ─────── 1000]          YES, first match wins            │
//! │                        [1000 ─────── 1500]   also contains 1000,        │
//! │                                              but never reached          │
//! │                                                                         │
//! │  Boundaries are inclusive on both ends, so a distance sitting exactly   │
//! │  on a shared boundary belongs to the EARLIER tier.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! The per-distance term `b × distance / 10` is rounded half away from zero
//! to whole cents. Everything else is integer arithmetic.
//!
//! ## Overflow
//! Sums use checked addition, and the per-distance term must stay within
//! the range where `f64` still holds whole cents exactly (±2^53). Anything
//! larger is [`CoreError::PriceOverflow`], never a clamped or wrapped fee.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::DistanceRange;

/// Largest magnitude at which every whole number of cents is exact in `f64`.
const MAX_EXACT_F64_CENTS: f64 = 9_007_199_254_740_992.0;

/// Finds the tier for `distance` (meters): the first range that contains it.
pub fn find_range(distance: f64, ranges: &[DistanceRange]) -> Option<&DistanceRange> {
    ranges.iter().find(|range| range.contains(distance))
}

/// Calculates the delivery fee for a distance in meters.
///
/// ## Errors
/// - [`CoreError::DeliveryRangeExceeded`] when no range matches: beyond the
///   last bounded tier, inside a gap, empty table, or a NaN/negative distance.
/// - [`CoreError::PriceOverflow`] when the fee does not fit in whole cents.
///
/// ## Example
/// ```rust
/// use dopc_core::fee::delivery_fee;
/// use dopc_core::money::Money;
/// use dopc_core::types::DistanceRange;
///
/// let ranges = vec![
///     DistanceRange { min: 0, max: Some(500), a: 0, b: 0 },
///     DistanceRange { min: 500, max: None, a: 100, b: 2 },
/// ];
///
/// let fee = delivery_fee(600.0, Money::from_cents(199), &ranges).unwrap();
/// assert_eq!(fee.cents(), 199 + 100 + 120);
/// ```
pub fn delivery_fee(distance: f64, base_price: Money, ranges: &[DistanceRange]) -> CoreResult<Money> {
    let range = find_range(distance, ranges).ok_or(CoreError::DeliveryRangeExceeded {
        distance_meters: distance,
    })?;

    let overflow = || CoreError::PriceOverflow {
        distance_meters: distance,
    };

    let charge = distance_charge(range.b, distance).ok_or_else(overflow)?;
    base_price
        .checked_add(range.flat_fee())
        .and_then(|fee| fee.checked_add(charge))
        .ok_or_else(overflow)
}

/// `b × distance / 10`, rounded to whole cents.
///
/// `None` when `b` or the result is too large for `f64` to hold exactly.
fn distance_charge(b: i64, distance: f64) -> Option<Money> {
    let b = b as f64;
    if b.abs() > MAX_EXACT_F64_CENTS {
        return None;
    }

    let charge = (b * distance / 10.0).round();
    if !charge.is_finite() || charge.abs() > MAX_EXACT_F64_CENTS {
        return None;
    }
    Some(Money::from_cents(charge as i64))
}
