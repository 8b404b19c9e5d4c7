//! General-form line type over the longitude/latitude plane.

use super::Point;
use crate::error::GeoError;
use crate::geodesic;
use num_traits::Float;

/// A line in general form `A·x + B·y + C = 0`, where x is longitude and
/// y is latitude.
///
/// A line is either built from raw coefficients or derived from two points
/// lying on it. The two-point form retains its defining points so that the
/// line's bearing can be queried later.
///
/// Invariant: A and B are never both zero; both constructors reject the
/// degenerate case with [`GeoError::DegenerateLine`].
///
/// # Example
///
/// ```
/// use geonav::{Line, Point};
///
/// let line: Line<f64> = Line::from_points(
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
/// ).unwrap();
/// assert!(line.eval_at(Point::new(0.0, 0.5)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<F> {
    /// Coefficient of longitude.
    pub a: F,
    /// Coefficient of latitude.
    pub b: F,
    /// Constant term.
    pub c: F,
    endpoints: Option<(Point<F>, Point<F>)>,
}

impl<F: Float> Line<F> {
    /// Creates a line from raw general-form coefficients.
    ///
    /// The resulting line has no defining points, so [`Line::bearing`] is
    /// unavailable on it.
    pub fn new(a: F, b: F, c: F) -> Result<Self, GeoError> {
        if a == F::zero() && b == F::zero() {
            return Err(GeoError::DegenerateLine);
        }
        Ok(Self {
            a,
            b,
            c,
            endpoints: None,
        })
    }

    /// Creates the line passing through two points, retaining both points.
    ///
    /// Coincident points span no line and are rejected.
    pub fn from_points(p1: Point<F>, p2: Point<F>) -> Result<Self, GeoError> {
        let a = p2.latitude - p1.latitude;
        let b = p1.longitude - p2.longitude;
        let c = p2.longitude * p1.latitude - p1.longitude * p2.latitude;
        if a == F::zero() && b == F::zero() {
            return Err(GeoError::DegenerateLine);
        }
        Ok(Self {
            a,
            b,
            c,
            endpoints: Some((p1, p2)),
        })
    }

    /// Returns the defining points, if the line was built from two points.
    #[inline]
    pub fn endpoints(&self) -> Option<(Point<F>, Point<F>)> {
        self.endpoints
    }

    /// Evaluates the left-hand side `A·lon + B·lat + C` at a point.
    ///
    /// Zero means the point is exactly on the line; the sign tells which
    /// side of the line it lies on.
    #[inline]
    pub fn eval_at(&self, p: Point<F>) -> F {
        self.a * p.longitude + self.b * p.latitude + self.c
    }

    /// Returns the line perpendicular to this one through the given point.
    pub fn perpendicular_through(&self, p: Point<F>) -> Self {
        Self {
            a: self.b,
            b: -self.a,
            c: self.a * p.latitude - self.b * p.longitude,
            endpoints: None,
        }
    }

    /// True when the line is a constant-latitude (horizontal) line.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.a == F::zero()
    }

    /// True when the line is a constant-longitude (vertical) line.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.b == F::zero()
    }

    /// Returns the latitude where the line crosses a constant longitude.
    ///
    /// Precondition: the line is not vertical (`B != 0`).
    #[inline]
    pub fn latitude_at(&self, longitude: F) -> F {
        (-self.a * longitude - self.c) / self.b
    }

    /// Returns the latitude intercept `−C/B` of a horizontal line.
    ///
    /// Precondition: `B != 0`.
    #[inline]
    pub fn latitude_intercept(&self) -> F {
        -self.c / self.b
    }

    /// Returns the longitude intercept `−C/A` of a vertical line.
    ///
    /// Precondition: `A != 0`.
    #[inline]
    pub fn longitude_intercept(&self) -> F {
        -self.c / self.a
    }

    /// Returns the initial bearing from the first defining point to the
    /// second, in degrees.
    ///
    /// Fails with [`GeoError::MissingEndpoints`] when the line was built
    /// from raw coefficients; a bearing cannot be derived from coefficients
    /// alone and no fallback is guessed.
    pub fn bearing(&self) -> Result<F, GeoError> {
        let (p1, p2) = self.endpoints.ok_or(GeoError::MissingEndpoints)?;
        Ok(geodesic::initial_bearing(p1, p2))
    }
}
