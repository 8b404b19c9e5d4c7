//! Error types for geonav operations.

use thiserror::Error;

/// Errors that can occur during geodesic and planar line operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Line coefficients A and B are both zero, or the two defining
    /// points coincide.
    #[error("degenerate line: A and B are both zero")]
    DegenerateLine,

    /// The line was built from raw coefficients and carries no defining
    /// points, so a bearing cannot be derived.
    #[error("line has no defining points")]
    MissingEndpoints,

    /// The two corridor lines do not share the same orientation.
    #[error("corridor lines have mismatched orientation")]
    MismatchedOrientation,

    /// No unique foot point exists for the requested projection.
    #[error("projection is undefined: lines are parallel or degenerate")]
    UndefinedProjection,
}
