//! Forward geodesic projection (the spherical direct problem).

use super::distance::EARTH_RADIUS_METERS;
use crate::primitives::Point;
use num_traits::Float;

/// Computes the point reached by travelling from `p` along `bearing_deg`
/// (degrees clockwise from north) for `distance_meters` along a great
/// circle.
///
/// The resulting coordinates are truncated toward zero at the sixth decimal
/// place, so a returned latitude of `-1.2345678` becomes `-1.234567` (not
/// `-1.234568`). Truncation, not rounding, is the contract here.
///
/// # Example
///
/// ```
/// use geonav::{destination_point, Point};
///
/// // One degree of arc due east along the equator.
/// let p = destination_point(Point::new(0.0, 0.0), 90.0, 111_195.0);
/// assert!(p.longitude > 0.999 && p.longitude < 1.001);
/// ```
pub fn destination_point<F: Float>(p: Point<F>, bearing_deg: F, distance_meters: F) -> Point<F> {
    let angular = distance_meters / F::from(EARTH_RADIUS_METERS).unwrap();
    let bearing = bearing_deg.to_radians();
    let lat1 = p.latitude_radians();

    let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos();
    // Clamp against floating-point overshoot before asin.
    let lat2 = sin_lat2.max(-F::one()).min(F::one()).asin();

    let lon2 = p.longitude_radians()
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Point::new(
        truncate_micro(lat2.to_degrees()),
        truncate_micro(lon2.to_degrees()),
    )
}

/// Truncates toward zero at the sixth decimal place.
#[inline]
fn truncate_micro<F: Float>(degrees: F) -> F {
    let scale = F::from(1_000_000.0).unwrap();
    (degrees * scale).trunc() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::{distance_between, initial_bearing};
    use approx::assert_relative_eq;

    #[test]
    fn test_truncate_micro_positive() {
        assert_relative_eq!(truncate_micro(1.234_567_89), 1.234_567, epsilon = 1e-12);
    }

    #[test]
    fn test_truncate_micro_negative_goes_toward_zero() {
        // Toward zero, not down: -1.2345678 truncates to -1.234567.
        assert_relative_eq!(truncate_micro(-1.234_567_89), -1.234_567, epsilon = 1e-12);
    }

    #[test]
    fn test_truncate_micro_exact() {
        assert_relative_eq!(truncate_micro(12.5), 12.5, epsilon = 1e-12);
    }

    #[test]
    fn test_due_north_one_degree() {
        let one_degree_meters = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;
        let p = destination_point(Point::new(0.0, 0.0), 0.0, one_degree_meters);
        assert_relative_eq!(p.latitude, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.longitude, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_due_east_one_degree() {
        let one_degree_meters = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;
        let p = destination_point(Point::new(0.0, 0.0), 90.0, one_degree_meters);
        assert_relative_eq!(p.latitude, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.longitude, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_distance_truncates_in_place() {
        let p = destination_point(Point::new(52.520_008_7, 13.404_953_9), 45.0, 0.0);
        assert_relative_eq!(p.latitude, 52.520_008, epsilon = 1e-12);
        assert_relative_eq!(p.longitude, 13.404_953, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_with_bearing_and_distance() {
        let from: Point<f64> = Point::new(52.52, 13.405);
        let to = Point::new(48.8566, 2.3522);

        let reached = destination_point(
            from,
            initial_bearing(from, to),
            distance_between(from, to),
        );

        // Only the 6-decimal truncation separates the result from `to`,
        // which is about 0.11 m per axis.
        assert!(distance_between(reached, to) < 0.5);
    }

    #[test]
    fn test_southern_hemisphere_round_trip() {
        let from: Point<f64> = Point::new(-33.8688, 151.2093);
        let to = Point::new(-37.8136, 144.9631);

        let reached = destination_point(
            from,
            initial_bearing(from, to),
            distance_between(from, to),
        );
        assert!(distance_between(reached, to) < 0.5);
    }
}
