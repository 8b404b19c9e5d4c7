//! Line and corridor membership predicates.

use crate::error::GeoError;
use crate::primitives::{Line, Point};
use num_traits::Float;

/// Tolerance used by [`is_on_line`], compared against the raw line residual.
pub const ON_LINE_TOLERANCE: f64 = 0.00001;

/// Tests whether a point lies on a line, within [`ON_LINE_TOLERANCE`].
///
/// The comparison is one-sided: `eval_at(p) <= ON_LINE_TOLERANCE`, so every
/// point on the negative side of the line passes regardless of its distance,
/// while points on the positive side pass only within the tolerance.
/// Callers needing a symmetric containment test should compare
/// `line.eval_at(p).abs()` against a tolerance themselves.
#[inline]
pub fn is_on_line<F: Float>(p: Point<F>, line: &Line<F>) -> bool {
    line.eval_at(p) <= F::from(ON_LINE_TOLERANCE).unwrap()
}

/// Tests whether a point lies in the strip delimited by two parallel lines,
/// bounds inclusive.
///
/// The strip is evaluated along the latitude axis, except for vertical
/// (constant-longitude) corridors which are evaluated along the longitude
/// axis. The two lines must share the same orientation; a horizontal line
/// paired with a vertical one has no well-defined strip and fails with
/// [`GeoError::MismatchedOrientation`].
pub fn is_between<F: Float>(
    p: Point<F>,
    line1: &Line<F>,
    line2: &Line<F>,
) -> Result<bool, GeoError> {
    if line1.is_horizontal() {
        if line2.is_vertical() {
            return Err(GeoError::MismatchedOrientation);
        }
        Ok(bounded_between(
            p.latitude,
            line1.latitude_intercept(),
            line2.latitude_intercept(),
        ))
    } else if line1.is_vertical() {
        if line2.is_horizontal() {
            return Err(GeoError::MismatchedOrientation);
        }
        Ok(bounded_between(
            p.longitude,
            line1.longitude_intercept(),
            line2.longitude_intercept(),
        ))
    } else {
        if line2.is_vertical() {
            return Err(GeoError::MismatchedOrientation);
        }
        Ok(bounded_between(
            p.latitude,
            line1.latitude_at(p.longitude),
            line2.latitude_at(p.longitude),
        ))
    }
}

/// True when `value` lies between the two bounds, inclusive, in either
/// order.
#[inline]
fn bounded_between<F: Float>(value: F, bound1: F, bound2: F) -> bool {
    (bound1 >= value && bound2 <= value) || (bound2 >= value && bound1 <= value)
}
