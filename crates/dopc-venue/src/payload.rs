//! # Venue API Payloads
//!
//! Raw JSON shapes served by the venue API and their conversion into the
//! strict domain types of `dopc-core`.
//!
//! ## Conversion
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  GET .../static   ──► StaticVenueResponse  ──► into_location()          │
//! │    venue_raw.location.coordinates [lon, lat]      └─► Coordinate        │
//! │                                                                         │
//! │  GET .../dynamic  ──► DynamicVenueResponse ──► into_pricing()           │
//! │    venue_raw.delivery_specs                       └─► VenuePricing      │
//! │      order_minimum_no_surcharge                                         │
//! │      delivery_pricing.base_price                                        │
//! │      delivery_pricing.distance_ranges [{min, max, a, b}]                │
//! │                                                                         │
//! │  Raw shapes accept missing fields; the conversion turns each gap into   │
//! │  VenueError::MalformedPayload naming the endpoint and the field.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use dopc_core::{Coordinate, DistanceRange, VenuePricing};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::error::{VenueError, VenueResult};

// =============================================================================
// Endpoint
// =============================================================================

/// The two venue API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Venue location.
    Static,
    /// Delivery pricing.
    Dynamic,
}

impl Endpoint {
    /// Last path segment of the endpoint URL.
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Endpoint::Static => "static",
            Endpoint::Dynamic => "dynamic",
        }
    }

    fn malformed(self, reason: impl Into<String>) -> VenueError {
        VenueError::MalformedPayload {
            endpoint: self,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

// =============================================================================
// Static Endpoint
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct StaticVenueResponse {
    #[serde(default)]
    pub venue_raw: Option<RawStaticVenue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawStaticVenue {
    #[serde(default)]
    pub location: Option<RawLocation>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawLocation {
    /// GeoJSON order: `[longitude, latitude]`.
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
}

impl StaticVenueResponse {
    /// Extracts the venue location.
    pub fn into_location(self) -> VenueResult<Coordinate> {
        let endpoint = Endpoint::Static;
        let coordinates = self
            .venue_raw
            .and_then(|venue| venue.location)
            .and_then(|location| location.coordinates)
            .ok_or_else(|| endpoint.malformed("missing venue_raw.location.coordinates"))?;

        let pair: [f64; 2] = coordinates.as_slice().try_into().map_err(|_| {
            endpoint.malformed(format!(
                "expected [longitude, latitude], got {} values",
                coordinates.len()
            ))
        })?;

        Coordinate::try_from_lon_lat(pair).map_err(|e| endpoint.malformed(e.to_string()))
    }
}

// =============================================================================
// Dynamic Endpoint
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct DynamicVenueResponse {
    #[serde(default)]
    pub venue_raw: Option<RawDynamicVenue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDynamicVenue {
    #[serde(default)]
    pub delivery_specs: Option<RawDeliverySpecs>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDeliverySpecs {
    #[serde(default)]
    pub order_minimum_no_surcharge: Option<i64>,
    #[serde(default)]
    pub delivery_pricing: Option<RawDeliveryPricing>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawDeliveryPricing {
    #[serde(default)]
    pub base_price: Option<i64>,
    #[serde(default)]
    pub distance_ranges: Option<Vec<RawDistanceRange>>,
}

/// One tier as served upstream.
///
/// `max` distinguishes "absent" (`None`) from an explicit `null`
/// (`Some(None)`), which marks an unbounded tier.
#[derive(Debug, Default, Deserialize)]
pub struct RawDistanceRange {
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default, deserialize_with = "present")]
    pub max: Option<Option<u32>>,
    #[serde(default)]
    pub a: Option<i64>,
    #[serde(default)]
    pub b: Option<i64>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl DynamicVenueResponse {
    /// Extracts the delivery pricing.
    pub fn into_pricing(self) -> VenueResult<VenuePricing> {
        let endpoint = Endpoint::Dynamic;
        let specs = self
            .venue_raw
            .and_then(|venue| venue.delivery_specs)
            .ok_or_else(|| endpoint.malformed("missing venue_raw.delivery_specs"))?;

        let order_minimum = non_negative(
            specs.order_minimum_no_surcharge,
            "order_minimum_no_surcharge",
        )?;

        let pricing = specs
            .delivery_pricing
            .ok_or_else(|| endpoint.malformed("missing delivery_specs.delivery_pricing"))?;

        let base_price = non_negative(pricing.base_price, "delivery_pricing.base_price")?;

        let distance_ranges = pricing
            .distance_ranges
            .ok_or_else(|| endpoint.malformed("missing delivery_pricing.distance_ranges"))?
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_range(index))
            .collect::<VenueResult<Vec<_>>>()?;

        Ok(VenuePricing {
            order_minimum_no_surcharge_cents: order_minimum,
            base_price_cents: base_price,
            distance_ranges,
        })
    }
}

impl RawDistanceRange {
    fn into_range(self, index: usize) -> VenueResult<DistanceRange> {
        let field = |name: &str| format!("distance_ranges[{index}].{name}");
        let endpoint = Endpoint::Dynamic;

        Ok(DistanceRange {
            min: self
                .min
                .ok_or_else(|| endpoint.malformed(format!("missing {}", field("min"))))?,
            max: self
                .max
                .ok_or_else(|| endpoint.malformed(format!("missing {}", field("max"))))?,
            a: non_negative(self.a, &field("a"))?,
            b: non_negative(self.b, &field("b"))?,
        })
    }
}

/// Requires a present, non-negative cent amount.
fn non_negative(value: Option<i64>, name: &str) -> VenueResult<i64> {
    match value {
        None => Err(Endpoint::Dynamic.malformed(format!("missing {name}"))),
        Some(cents) if cents < 0 => Err(Endpoint::Dynamic.malformed(format!(
            "{name} must not be negative, got {cents}"
        ))),
        Some(cents) => Ok(cents),
    }
}

/// Decodes a response body, mapping JSON errors to `MalformedPayload`.
pub(crate) fn decode<T>(endpoint: Endpoint, body: &[u8]) -> VenueResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_slice(body).map_err(|e| endpoint.malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn static_body(coordinates: serde_json::Value) -> StaticVenueResponse {
        serde_json::from_value(json!({
            "venue_raw": { "location": { "coordinates": coordinates } }
        }))
        .unwrap()
    }

    fn dynamic_body() -> serde_json::Value {
        json!({
            "venue_raw": {
                "delivery_specs": {
                    "order_minimum_no_surcharge": 1000,
                    "delivery_pricing": {
                        "base_price": 190,
                        "distance_ranges": [
                            { "min": 0, "max": 500, "a": 0, "b": 0, "flag": null },
                            { "min": 500, "max": 1000, "a": 100, "b": 1, "flag": null },
                            { "min": 1000, "max": 0, "a": 0, "b": 0, "flag": null }
                        ]
                    }
                }
            }
        })
    }

    #[test]
    fn test_location_is_lon_lat() {
        let location = static_body(json!([24.92813512, 60.17012143]))
            .into_location()
            .unwrap();
        assert_eq!(location.latitude, 60.17012143);
        assert_eq!(location.longitude, 24.92813512);
    }

    #[test]
    fn test_location_arity() {
        let err = static_body(json!([24.9])).into_location().unwrap_err();
        assert!(matches!(
            err,
            VenueError::MalformedPayload { endpoint: Endpoint::Static, .. }
        ));

        assert!(static_body(json!([24.9, 60.1, 10.0])).into_location().is_err());
    }

    #[test]
    fn test_location_out_of_range() {
        // latitude 124.9
        let err = static_body(json!([60.17, 124.9])).into_location().unwrap_err();
        assert!(matches!(err, VenueError::MalformedPayload { .. }));
    }

    #[test]
    fn test_missing_location() {
        let response: StaticVenueResponse = serde_json::from_value(json!({ "venue_raw": {} })).unwrap();
        let err = response.into_location().unwrap_err();
        assert!(err.to_string().contains("coordinates"));
    }

    #[test]
    fn test_pricing_conversion() {
        let response: DynamicVenueResponse = serde_json::from_value(dynamic_body()).unwrap();
        let pricing = response.into_pricing().unwrap();

        assert_eq!(pricing.order_minimum_no_surcharge_cents, 1000);
        assert_eq!(pricing.base_price_cents, 190);
        assert_eq!(pricing.distance_ranges.len(), 3);
        assert_eq!(
            pricing.distance_ranges[1],
            DistanceRange { min: 500, max: Some(1000), a: 100, b: 1 }
        );
        assert_eq!(pricing.distance_ranges[2].max, Some(0));
    }

    #[test]
    fn test_null_max_is_unbounded() {
        let mut body = dynamic_body();
        body["venue_raw"]["delivery_specs"]["delivery_pricing"]["distance_ranges"][2]["max"] =
            serde_json::Value::Null;

        let response: DynamicVenueResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_pricing().unwrap().distance_ranges[2].max, None);
    }

    #[test]
    fn test_missing_range_field() {
        let mut body = dynamic_body();
        body["venue_raw"]["delivery_specs"]["delivery_pricing"]["distance_ranges"][1]
            .as_object_mut()
            .unwrap()
            .remove("max");

        let response: DynamicVenueResponse = serde_json::from_value(body).unwrap();
        let err = response.into_pricing().unwrap_err();
        assert!(err.to_string().contains("distance_ranges[1].max"));
    }

    #[test]
    fn test_missing_base_price() {
        let mut body = dynamic_body();
        body["venue_raw"]["delivery_specs"]["delivery_pricing"]
            .as_object_mut()
            .unwrap()
            .remove("base_price");

        let response: DynamicVenueResponse = serde_json::from_value(body).unwrap();
        let err = response.into_pricing().unwrap_err();
        assert!(matches!(
            err,
            VenueError::MalformedPayload { endpoint: Endpoint::Dynamic, .. }
        ));
        assert!(err.to_string().contains("base_price"));
    }

    #[test]
    fn test_negative_money_rejected() {
        let mut body = dynamic_body();
        body["venue_raw"]["delivery_specs"]["order_minimum_no_surcharge"] = json!(-1);

        let response: DynamicVenueResponse = serde_json::from_value(body).unwrap();
        let err = response.into_pricing().unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_decode_invalid_json() {
        let err = decode::<StaticVenueResponse>(Endpoint::Static, b"<html>").unwrap_err();
        assert!(matches!(
            err,
            VenueError::MalformedPayload { endpoint: Endpoint::Static, .. }
        ));
    }
}
