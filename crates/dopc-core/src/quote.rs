//! # Quote Assembly
//!
//! Composes distance, surcharge and fee into one [`QuoteResult`].
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  user_location ──┐                                                      │
//! │                  ├──► distance() ──► meters ──► delivery_fee() ──┐      │
//! │  venue.location ─┘                                 │             │      │
//! │                                                    ▼             │      │
//! │                                      DeliveryRangeExceeded ──► Err      │
//! │                                                                  │      │
//! │  cart_value ──► small_order_surcharge(cart, minimum) ────────────┤      │
//! │                                                                  ▼      │
//! │                               total = cart + surcharge + fee ──► Ok     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Single shot: no retries, no cached state, no partial results.

use crate::distance::distance;
use crate::error::{CoreError, CoreResult};
use crate::fee::delivery_fee;
use crate::money::Money;
use crate::surcharge::small_order_surcharge;
use crate::types::{Coordinate, QuoteResult, VenueData};
use crate::validation::ValidatedQuoteRequest;

/// Prices one delivery order.
///
/// ## Errors
/// - [`CoreError::DeliveryRangeExceeded`] from the fee engine.
/// - [`CoreError::PriceOverflow`] when the fee or the total does not fit.
///
/// ## Example
/// ```rust
/// use dopc_core::money::Money;
/// use dopc_core::quote::assemble_quote;
/// use dopc_core::types::{Coordinate, DistanceRange, VenuePricing, VenueData};
///
/// let venue = VenueData {
///     location: Coordinate::new(60.17012143, 24.92813512),
///     pricing: VenuePricing {
///         order_minimum_no_surcharge_cents: 1000,
///         base_price_cents: 190,
///         distance_ranges: vec![DistanceRange { min: 0, max: Some(500), a: 0, b: 0 }],
///     },
/// };
///
/// let quote = assemble_quote(Money::from_cents(1000), Coordinate::new(60.17094, 24.93087), &venue).unwrap();
/// assert_eq!(quote.total_price_cents, 1190);
/// ```
pub fn assemble_quote(
    cart_value: Money,
    user_location: Coordinate,
    venue: &VenueData,
) -> CoreResult<QuoteResult> {
    let pricing = &venue.pricing;
    let delivery_distance = distance(user_location, venue.location);

    let surcharge = small_order_surcharge(cart_value, pricing.order_minimum_no_surcharge());
    let fee = delivery_fee(delivery_distance, pricing.base_price(), &pricing.distance_ranges)?;
    let total = cart_value
        .checked_add(surcharge)
        .and_then(|sum| sum.checked_add(fee))
        .ok_or(CoreError::PriceOverflow {
            distance_meters: delivery_distance,
        })?;

    Ok(QuoteResult {
        cart_value_cents: cart_value.cents(),
        small_order_surcharge_cents: surcharge.cents(),
        delivery_fee_cents: fee.cents(),
        delivery_distance_meters: delivery_distance,
        total_price_cents: total.cents(),
    })
}

/// Prices a validated form against fetched venue data.
pub fn assemble_for_request(request: &ValidatedQuoteRequest, venue: &VenueData) -> CoreResult<QuoteResult> {
    assemble_quote(request.cart_value, request.user_location, venue)
}
