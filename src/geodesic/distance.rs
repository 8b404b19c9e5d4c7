//! Haversine great-circle distance.

use crate::primitives::Point;
use num_traits::Float;

/// Mean Earth radius in meters, spherical approximation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Computes the great-circle distance between two points in meters.
///
/// Uses the haversine formula on a sphere of [`EARTH_RADIUS_METERS`].
/// Symmetric in its arguments up to floating-point rounding, and zero for
/// identical points.
///
/// # Example
///
/// ```
/// use geonav::{distance_between, Point};
///
/// let d: f64 = distance_between(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
/// assert!((d - 111_195.0).abs() < 50.0);
/// ```
pub fn distance_between<F: Float>(p1: Point<F>, p2: Point<F>) -> F {
    let half = F::from(0.5).unwrap();
    let d_lat = (p2.latitude - p1.latitude).to_radians();
    let d_lon = (p2.longitude - p1.longitude).to_radians();

    let h = (d_lat * half).sin().powi(2)
        + p1.latitude_radians().cos() * p2.latitude_radians().cos() * (d_lon * half).sin().powi(2);
    // Floating noise can push h just past 1 for near-antipodal points.
    let h = h.max(F::zero()).min(F::one());

    let c = F::from(2.0).unwrap() * h.sqrt().asin();
    F::from(EARTH_RADIUS_METERS).unwrap() * c
}
