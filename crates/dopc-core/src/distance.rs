//! Great-circle distance using the haversine formula.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Haversine_formula) for
//! more.
//!
//! **Distance is returned in meters**.

use crate::types::Coordinate;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Calculate the distance between two coordinates on a sphere.
///
/// # Notes
/// Altitude is not taken into account. Inputs are not validated; any finite
/// pair of coordinates yields a finite, non-negative distance.
pub fn distance(origin: Coordinate, destination: Coordinate) -> f64 {
    haversine_distance(
        origin.latitude,
        origin.longitude,
        destination.latitude,
        destination.longitude,
    )
}

/// Haversine distance between two `(lat, lon)` pairs given in degrees.
///
/// ```rust
/// use dopc_core::distance::haversine_distance;
///
/// assert_eq!(haversine_distance(60.1699, 24.9384, 60.1699, 24.9384), 0.0);
/// ```
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // rounding can push `a` just past 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}
