//! Error types for triangulation.

use thiserror::Error;

/// Errors reported by the checked triangulation entry points.
///
/// The unchecked [`triangulate`](crate::triangulate) never fails; these
/// errors exist for callers who want malformed input rejected up front.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// An input point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input.
        index: usize,
    },

    /// The super-triangle margin would not enclose every input point.
    #[error("super-triangle margin {margin} must be finite and greater than 2/sqrt(3)")]
    InvalidMargin {
        /// The rejected margin, widened to `f64`.
        margin: f64,
    },
}
