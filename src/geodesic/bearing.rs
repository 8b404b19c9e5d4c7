//! Initial great-circle bearing.

use crate::primitives::Point;
use num_traits::Float;

/// Computes the initial bearing from `from` to `to` in degrees.
///
/// The bearing is measured clockwise from north and normalized to
/// [0, 360). It is the forward azimuth at `from`; along a great circle the
/// bearing generally changes en route.
///
/// For identical points the formula degenerates to `atan2(0, 0)` and the
/// result is 0 by documented choice.
///
/// # Example
///
/// ```
/// use geonav::{initial_bearing, Point};
///
/// let b: f64 = initial_bearing(Point::new(0.0, 0.0), Point::new(0.0, 1.0));
/// assert!((b - 90.0).abs() < 1e-9);
/// ```
pub fn initial_bearing<F: Float>(from: Point<F>, to: Point<F>) -> F {
    let d_lon = (to.longitude - from.longitude).to_radians();
    let from_lat = from.latitude_radians();
    let to_lat = to.latitude_radians();

    let y = d_lon.sin() * to_lat.cos();
    let x = from_lat.cos() * to_lat.sin() - from_lat.sin() * to_lat.cos() * d_lon.cos();

    let full_turn = F::from(360.0).unwrap();
    (y.atan2(x).to_degrees() + full_turn) % full_turn
}
