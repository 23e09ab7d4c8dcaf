//! Small order surcharge.

use crate::money::Money;

/// Surcharge that tops a small cart up to the venue minimum.
///
/// `max(0, minimum_no_surcharge - cart_value)`
///
/// ```rust
/// use dopc_core::money::Money;
/// use dopc_core::surcharge::small_order_surcharge;
///
/// let minimum = Money::from_cents(1000);
/// assert_eq!(small_order_surcharge(Money::from_cents(890), minimum).cents(), 110);
/// assert_eq!(small_order_surcharge(Money::from_cents(1000), minimum).cents(), 0);
/// ```
#[inline]
pub fn small_order_surcharge(cart_value: Money, minimum_no_surcharge: Money) -> Money {
    minimum_no_surcharge.saturating_sub_to_zero(cart_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_surcharge_at_or_above_minimum() {
        let minimum = Money::from_cents(1000);
        for cart in [1000, 1001, 2000, 1_000_000] {
            assert!(small_order_surcharge(Money::from_cents(cart), minimum).is_zero());
        }
    }

    #[test]
    fn test_surcharge_is_the_difference_below_minimum() {
        let minimum = Money::from_cents(1000);
        for cart in [1, 100, 890, 999] {
            let surcharge = small_order_surcharge(Money::from_cents(cart), minimum);
            assert_eq!(surcharge.cents(), 1000 - cart);
        }
    }

    #[test]
    fn test_zero_minimum_never_charges() {
        assert!(small_order_surcharge(Money::from_cents(1), Money::zero()).is_zero());
    }
}
