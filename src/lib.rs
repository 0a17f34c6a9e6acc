//! polypart - Convex partition of simple polygons
//!
//! Splits a simple counter-clockwise polygon into triangles by ear clipping,
//! then merges those triangles back into a small set of convex pieces with
//! the Hertel-Mehlhorn heuristic. All geometry is generic over
//! [`num_traits::Float`].
//!
//! ```
//! use polypart::{
//!     convex_partition, convex_partition_with_tolerance, count_reflex_vertices,
//!     find_reflex_vertices, triangulation_area, Point2, Polygon, DEFAULT_MERGE_TOLERANCE,
//! };
//!
//! let l_shape = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! assert_eq!(find_reflex_vertices(&l_shape), vec![3]);
//!
//! let parts = convex_partition(&l_shape).unwrap();
//! assert_eq!(parts.len(), 2);
//! assert!(parts.iter().all(|part| count_reflex_vertices(part) == 0));
//! assert_eq!(triangulation_area(&parts), l_shape.area());
//! assert_eq!(
//!     convex_partition_with_tolerance(&l_shape, DEFAULT_MERGE_TOLERANCE).unwrap(),
//!     parts
//! );
//! ```

pub mod error;
pub mod polygon;
pub mod predicates;
pub mod primitives;

pub use error::PartitionError;
pub use polygon::{
    convex_partition, convex_partition_with_tolerance, count_reflex_vertices,
    find_reflex_vertices, triangulate, triangulate_all, triangulate_indexed, triangulation_area,
    Polygon, TriangulationResult, Winding, DEFAULT_MERGE_TOLERANCE,
};
pub use predicates::{
    distance, in_cone, is_convex, is_reflex, normalize, orientation, point_in_triangle,
    segments_intersect,
};
pub use primitives::{Point2, Vec2};
