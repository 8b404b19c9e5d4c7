//! Membership tests and projection in the longitude/latitude plane.
//!
//! These operations treat coordinates as plain planar values; no spherical
//! correction is applied. They pair with the corridor-style line bounds a
//! routing layer builds around segments.

mod predicates;
mod projection;

pub use predicates::{is_between, is_on_line, ON_LINE_TOLERANCE};
pub use projection::project_onto;
