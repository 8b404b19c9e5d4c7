//! Geographic point type.

use num_traits::Float;

/// A geographic point given as latitude and longitude in decimal degrees.
///
/// Generic over floating-point types (`f32` or `f64`). Values outside the
/// usual [-90, 90] / [-180, 180] ranges are accepted uninterpreted; keeping
/// coordinates meaningful is the caller's responsibility. Equality is plain
/// value equality.
///
/// # Example
///
/// ```
/// use geonav::Point;
///
/// let berlin: Point<f64> = Point::new(52.52, 13.405);
/// assert_eq!(berlin.latitude, 52.52);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<F> {
    /// Latitude in decimal degrees.
    pub latitude: F,
    /// Longitude in decimal degrees.
    pub longitude: F,
}

impl<F: Float> Point<F> {
    /// Creates a new point from latitude and longitude in degrees.
    #[inline]
    pub fn new(latitude: F, longitude: F) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude in radians.
    #[inline]
    pub fn latitude_radians(self) -> F {
        self.latitude.to_radians()
    }

    /// Returns the longitude in radians.
    #[inline]
    pub fn longitude_radians(self) -> F {
        self.longitude.to_radians()
    }

    /// Returns the planar (arithmetic-mean) midpoint between two points.
    ///
    /// This averages raw coordinates in the longitude/latitude plane; it is
    /// not the great-circle midpoint and diverges from it over long spans.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let half = F::from(0.5).unwrap();
        Self {
            latitude: (self.latitude + other.latitude) * half,
            longitude: (self.longitude + other.longitude) * half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let p: Point<f64> = Point::new(52.52, 13.405);
        assert_eq!(p.latitude, 52.52);
        assert_eq!(p.longitude, 13.405);
    }

    #[test]
    fn test_radians() {
        let p: Point<f64> = Point::new(180.0, 90.0);
        assert_relative_eq!(p.latitude_radians(), std::f64::consts::PI, epsilon = 1e-12);
        assert_relative_eq!(
            p.longitude_radians(),
            std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_midpoint() {
        let a: Point<f64> = Point::new(0.0, 0.0);
        let b: Point<f64> = Point::new(2.0, 4.0);
        let mid = a.midpoint(b);
        assert_relative_eq!(mid.latitude, 1.0, epsilon = 1e-12);
        assert_relative_eq!(mid.longitude, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_value_equality() {
        let a: Point<f64> = Point::new(1.5, -2.5);
        let b = Point::new(1.5, -2.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_f32_support() {
        let p: Point<f32> = Point::new(10.0, 20.0);
        assert_relative_eq!(p.midpoint(p).latitude, 10.0, epsilon = 1e-6);
    }
}
