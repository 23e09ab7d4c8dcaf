//! # Domain Types
//!
//! Core domain types used throughout the price calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────────┐                     │
//! │  │   Coordinate    │   │      VenuePricing       │                     │
//! │  │  ─────────────  │   │  ─────────────────────  │                     │
//! │  │  latitude  f64  │   │  order_minimum_cents    │                     │
//! │  │  longitude f64  │   │  base_price_cents       │                     │
//! │  └────────┬────────┘   │  distance_ranges ───────┼──► DistanceRange    │
//! │           │            └────────────┬────────────┘    min, max, a, b   │
//! │           │                         │                                   │
//! │           └──────────┬──────────────┘                                   │
//! │                      ▼                                                  │
//! │              ┌───────────────┐          ┌─────────────────┐            │
//! │              │   VenueData   │ ───────► │   QuoteResult   │            │
//! │              │ location      │  quote   │ cart, surcharge │            │
//! │              │ pricing       │          │ fee, distance   │            │
//! │              └───────────────┘          │ total           │            │
//! │                                         └─────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types are immutable values produced fresh for each calculation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Coordinate
// =============================================================================

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate, rejecting values outside the valid ranges.
    ///
    /// ## Example
    /// ```rust
    /// use dopc_core::types::Coordinate;
    ///
    /// assert!(Coordinate::try_new(60.17094, 24.93087).is_ok());
    /// assert!(Coordinate::try_new(91.0, 0.0).is_err());
    /// assert!(Coordinate::try_new(0.0, f64::NAN).is_err());
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        check_range("Latitude", latitude, LATITUDE_RANGE)?;
        check_range("Longitude", longitude, LONGITUDE_RANGE)?;
        Ok(Coordinate::new(latitude, longitude))
    }

    /// Creates a coordinate from a GeoJSON-style `[longitude, latitude]` pair.
    pub fn try_from_lon_lat(pair: [f64; 2]) -> Result<Self, ValidationError> {
        Coordinate::try_new(pair[1], pair[0])
    }
}

pub(crate) fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<(), ValidationError> {
    // NaN fails both comparisons, so it is rejected here as well
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: min as i64,
            max: max as i64,
        })
    }
}

// =============================================================================
// Distance Range
// =============================================================================

/// One delivery distance tier.
///
/// ## Pricing Formula
/// ```text
/// fee = base_price + a + b × distance / 10
///                    │   └── per 10 meters, in cents
///                    └────── flat addend, in cents
/// ```
///
/// Both `min` and `max` are inclusive. `max: None` means the tier is unbounded.
/// The upstream payload names these keys `min`/`max`; older fixtures use
/// `from`/`to`, which are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DistanceRange {
    /// Lower bound in meters (inclusive).
    #[serde(alias = "from")]
    pub min: u32,

    /// Upper bound in meters (inclusive), `None` for unbounded.
    #[serde(alias = "to")]
    pub max: Option<u32>,

    /// Flat addend in cents.
    pub a: i64,

    /// Multiplier in cents per 10 meters.
    pub b: i64,
}

impl DistanceRange {
    /// Returns true when `distance` (meters) falls inside this tier.
    ///
    /// NaN never matches.
    #[inline]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= f64::from(self.min)
            && self.max.map_or(true, |max| distance <= f64::from(max))
    }

    /// Returns the flat addend as Money.
    #[inline]
    pub fn flat_fee(&self) -> Money {
        Money::from_cents(self.a)
    }
}

// =============================================================================
// Venue Pricing
// =============================================================================

/// Dynamic delivery pricing for one venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VenuePricing {
    /// Cart value below which a small order surcharge applies.
    pub order_minimum_no_surcharge_cents: i64,

    /// Base delivery price added to every tier.
    pub base_price_cents: i64,

    /// Distance tiers, ordered by `min` ascending.
    pub distance_ranges: Vec<DistanceRange>,
}

impl VenuePricing {
    /// Returns the order minimum as Money.
    #[inline]
    pub fn order_minimum_no_surcharge(&self) -> Money {
        Money::from_cents(self.order_minimum_no_surcharge_cents)
    }

    /// Returns the base price as Money.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }
}

// =============================================================================
// Venue Data
// =============================================================================

/// Everything the core needs to know about a venue.
///
/// Built only when both the static and the dynamic venue data were fetched
/// and parsed successfully.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VenueData {
    pub location: Coordinate,
    pub pricing: VenuePricing,
}

// =============================================================================
// Quote Result
// =============================================================================

/// The price breakdown for one delivery order.
///
/// `total_price_cents = cart_value_cents + small_order_surcharge_cents + delivery_fee_cents`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteResult {
    pub cart_value_cents: i64,
    pub small_order_surcharge_cents: i64,
    pub delivery_fee_cents: i64,
    /// Straight-line distance between customer and venue.
    pub delivery_distance_meters: f64,
    pub total_price_cents: i64,
}

impl QuoteResult {
    /// Returns the cart value as Money.
    #[inline]
    pub fn cart_value(&self) -> Money {
        Money::from_cents(self.cart_value_cents)
    }

    /// Returns the small order surcharge as Money.
    #[inline]
    pub fn small_order_surcharge(&self) -> Money {
        Money::from_cents(self.small_order_surcharge_cents)
    }

    /// Returns the delivery fee as Money.
    #[inline]
    pub fn delivery_fee(&self) -> Money {
        Money::from_cents(self.delivery_fee_cents)
    }

    /// Returns the total as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents)
    }

    /// Distance rounded to whole meters, as shown to customers.
    #[inline]
    pub fn rounded_distance_meters(&self) -> u64 {
        self.delivery_distance_meters.round() as u64
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_try_new_bounds() {
        assert!(Coordinate::try_new(90.0, 180.0).is_ok());
        assert!(Coordinate::try_new(-90.0, -180.0).is_ok());

        let err = Coordinate::try_new(-90.000001, 0.0).unwrap_err();
        assert_eq!(err.field(), "Latitude");

        let err = Coordinate::try_new(0.0, 180.5).unwrap_err();
        assert_eq!(err.field(), "Longitude");
    }

    #[test]
    fn test_coordinate_from_lon_lat_swaps_order() {
        let venue = Coordinate::try_from_lon_lat([24.92813512, 60.17012143]).unwrap();
        assert_eq!(venue.latitude, 60.17012143);
        assert_eq!(venue.longitude, 24.92813512);
    }

    #[test]
    fn test_distance_range_contains_is_inclusive() {
        let range = DistanceRange {
            min: 500,
            max: Some(1000),
            a: 100,
            b: 1,
        };
        assert!(range.contains(500.0));
        assert!(range.contains(1000.0));
        assert!(!range.contains(499.99));
        assert!(!range.contains(1000.01));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn test_distance_range_unbounded() {
        let range = DistanceRange {
            min: 3000,
            max: None,
            a: 400,
            b: 200,
        };
        assert!(range.contains(3000.0));
        assert!(range.contains(1.0e9));
        assert!(!range.contains(2999.0));
    }

    #[test]
    fn test_distance_range_accepts_from_to_aliases() {
        let range: DistanceRange =
            serde_json::from_str(r#"{"from": 0, "to": null, "a": 200, "b": 100}"#).unwrap();
        assert_eq!(range.min, 0);
        assert_eq!(range.max, None);
        assert_eq!(range.flat_fee().cents(), 200);
    }

    #[test]
    fn test_quote_result_accessors() {
        let quote = QuoteResult {
            cart_value_cents: 2000,
            small_order_surcharge_cents: 500,
            delivery_fee_cents: 300,
            delivery_distance_meters: 176.54,
            total_price_cents: 2800,
        };
        assert_eq!(quote.total_price().cents(), 2800);
        assert_eq!(quote.rounded_distance_meters(), 177);
    }
}
