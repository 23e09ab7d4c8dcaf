//! # Money
//!
//! Integer euro cents for every amount in a quote.
//!
//! ## Where Floats Stop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  distance (f64 meters) ──► b × distance / 10 ──► round ──► Money        │
//! │                                                  ▲                      │
//! │                              only f64 → cents step in pricing           │
//! │                                                                         │
//! │  cart text "10.5" ──► digits read directly ──► Money(1050)              │
//! │                                                                         │
//! │  cart + surcharge + delivery fee = total   (i64 addition, exact)        │
//! │  1000 + 0         + 190          = 1190                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```rust
//! use dopc_core::money::Money;
//!
//! let cart = Money::from_cents(1000);
//! let total = cart + Money::from_cents(190);
//! assert_eq!(total.to_string(), "11.90");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for EUR).
///
/// Signed, because `minimum - cart` is computed before it is clamped to zero.
/// Serializes as a bare integer.
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  "10.00" (form) ──► validate_cart_value ──► cart_value ─────────┐       │
/// │                                                                 │       │
/// │  order_minimum_no_surcharge ──► small_order_surcharge ──────────┤       │
/// │                                                                 ├─► total
/// │  base_price + a + b·d/10 ──► delivery_fee ──────────────────────┘       │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use dopc_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units, or `None` on overflow.
    ///
    /// Only non-negative amounts are expected here (cart values parsed from
    /// user input).
    ///
    /// ## Example
    /// ```rust
    /// use dopc_core::money::Money;
    ///
    /// let cart = Money::checked_from_major_minor(10, 50).unwrap();
    /// assert_eq!(cart.cents(), 1050);
    /// assert!(Money::checked_from_major_minor(i64::MAX, 0).is_none());
    /// ```
    pub fn checked_from_major_minor(major: i64, minor: i64) -> Option<Self> {
        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
    }

    /// Converts a float amount in major units (e.g. euros) into cents.
    ///
    /// Rounds half away from zero: `round(value * 100)`. Callers holding the
    /// original decimal text should prefer the exact conversion done by
    /// [`crate::validation::validate_cart_value`].
    ///
    /// ## Example
    /// ```rust
    /// use dopc_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_f64(10.0).cents(), 1000);
    /// assert_eq!(Money::from_major_f64(0.125).cents(), 13);
    /// assert_eq!(Money::from_major_f64(-0.125).cents(), -13);
    /// ```
    pub fn from_major_f64(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Adds `other`, or `None` if the sum leaves the `i64` range.
    ///
    /// ## Example
    /// ```rust
    /// use dopc_core::money::Money;
    ///
    /// let fee = Money::from_cents(190).checked_add(Money::from_cents(100));
    /// assert_eq!(fee, Some(Money::from_cents(290)));
    /// assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_none());
    /// ```
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts `other`, clamping the result at zero.
    ///
    /// ## Example
    /// ```rust
    /// use dopc_core::money::Money;
    ///
    /// let minimum = Money::from_cents(1000);
    /// assert_eq!(minimum.saturating_sub_to_zero(Money::from_cents(890)).cents(), 110);
    /// assert_eq!(minimum.saturating_sub_to_zero(Money::from_cents(1500)).cents(), 0);
    /// ```
    #[inline]
    pub fn saturating_sub_to_zero(self, other: Money) -> Money {
        (self - other).max(Money::zero())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `major.minor` without a currency symbol.
///
/// ## Note
/// Currency symbols and locale formatting are left to the presentation layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_checked_from_major_minor() {
        assert_eq!(Money::checked_from_major_minor(10, 0).unwrap().cents(), 1000);
        assert_eq!(Money::checked_from_major_minor(0, 5).unwrap().cents(), 5);
        assert!(Money::checked_from_major_minor(i64::MAX / 100, 99).is_none());
    }

    #[test]
    fn test_from_major_f64_rounds_half_away_from_zero() {
        assert_eq!(Money::from_major_f64(10.0).cents(), 1000);
        assert_eq!(Money::from_major_f64(19.99).cents(), 1999);
        // 0.125 is exactly representable, so this hits the tie.
        assert_eq!(Money::from_major_f64(0.125).cents(), 13);
        assert_eq!(Money::from_major_f64(-0.125).cents(), -13);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1190)), "11.90");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(190);

        assert_eq!((a + b).cents(), 1190);
        assert_eq!((b - a).cents(), -810);

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total.cents(), 1190);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(190)), Some(Money::from_cents(1190)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::zero()), Some(Money::from_cents(i64::MAX)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(a), None);
    }

    #[test]
    fn test_saturating_sub_to_zero() {
        let minimum = Money::from_cents(1000);
        assert_eq!(minimum.saturating_sub_to_zero(Money::from_cents(1000)), Money::zero());
        assert_eq!(minimum.saturating_sub_to_zero(Money::from_cents(1)).cents(), 999);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(Money::default(), zero);
    }
}
