//! Perpendicular projection of a point onto a line.

use crate::error::GeoError;
use crate::primitives::{Line, Point};
use num_traits::Float;

/// Projects `p` orthogonally onto the infinite line through `p1` and `p2`.
///
/// The foot point is the intersection of the line with the perpendicular
/// through `p`, solved by Cramer's rule. Coincident `p1` and `p2` span no
/// line and fail with [`GeoError::DegenerateLine`]; a vanishing determinant
/// fails with [`GeoError::UndefinedProjection`] instead of letting
/// NaN/Infinity escape.
///
/// # Example
///
/// ```
/// use geonav::{project_onto, Point};
///
/// let foot = project_onto(
///     Point::<f64>::new(5.0, 3.0),
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
/// ).unwrap();
/// assert!((foot.latitude - 0.0).abs() < 1e-12);
/// assert!((foot.longitude - 3.0).abs() < 1e-12);
/// ```
pub fn project_onto<F: Float>(
    p: Point<F>,
    p1: Point<F>,
    p2: Point<F>,
) -> Result<Point<F>, GeoError> {
    let line = Line::from_points(p1, p2)?;
    let perp = line.perpendicular_through(p);

    let zn = line.a * perp.b - line.b * perp.a;
    if zn == F::zero() {
        return Err(GeoError::UndefinedProjection);
    }

    let longitude = (line.b * perp.c - line.c * perp.b) / zn;
    let latitude = (line.c * perp.a - line.a * perp.c) / zn;
    Ok(Point::new(latitude, longitude))
}
