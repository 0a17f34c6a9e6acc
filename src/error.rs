//! Error types for partition operations.

use thiserror::Error;

/// Errors that can occur while triangulating or partitioning a polygon.
///
/// Polygons with fewer than three vertices are not an error: they produce an
/// empty result. Collinear or repeated vertices are tolerated and simply
/// never qualify as ears.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// Ear clipping ran out of ears before the ring was reduced to a
    /// triangle. The input is self-intersecting, has duplicate points, or is
    /// wound clockwise.
    #[error("triangulation stalled: no ear among {remaining} remaining vertices after {clipped} clips")]
    TriangulationStalled {
        /// Vertices still in the ring when the search failed.
        remaining: usize,
        /// Ears clipped before the failure.
        clipped: usize,
    },
}
