//! geonav - Great-circle navigation and corridor geometry.
//!
//! A small, stateless toolkit for geographic points and general-form lines:
//! haversine distances, initial bearings, forward geodesic projection, and
//! membership tests against corridors in the longitude/latitude plane. All
//! operations are pure functions over immutable `Copy` values, so concurrent
//! callers need no coordination.

pub mod error;
pub mod geodesic;
pub mod planar;
pub mod primitives;

pub use error::GeoError;
pub use geodesic::{
    destination_point, distance_between, initial_bearing, EARTH_RADIUS_METERS,
};
pub use planar::{is_between, is_on_line, project_onto, ON_LINE_TOLERANCE};
pub use primitives::{Line, Point};
