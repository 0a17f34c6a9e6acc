//! Polygon triangulation and convex partition.
//!
//! This module provides:
//! - The [`Polygon`] type with area, winding and convexity queries
//! - Ear clipping triangulation
//! - Hertel-Mehlhorn convex partition built on top of it
//!
//! Both algorithms expect a simple polygon wound counter-clockwise. Normalize
//! input of unknown winding with [`Polygon::set_orientation`] first.
//!
//! # Example
//!
//! ```
//! use polypart::polygon::{convex_partition, triangulate, Polygon, Winding};
//! use polypart::Point2;
//!
//! // Clicked in clockwise order
//! let mut l_shape = Polygon::new(vec![
//!     Point2::new(0.0, 4.0),
//!     Point2::new(2.0, 4.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 0.0),
//! ]);
//! l_shape.set_orientation(Winding::CounterClockwise);
//!
//! assert_eq!(triangulate(&l_shape).unwrap().len(), 4);
//! assert_eq!(convex_partition(&l_shape).unwrap().len(), 2);
//! ```

mod core;
mod decompose;
mod triangulate;

#[cfg(test)]
mod proptests;

pub use core::{polygon_area, polygon_signed_area, Polygon, Winding};
pub use decompose::{
    convex_partition, convex_partition_with_tolerance, count_reflex_vertices,
    find_reflex_vertices, DEFAULT_MERGE_TOLERANCE,
};
pub use triangulate::{
    triangulate, triangulate_all, triangulate_indexed, triangulation_area, TriangulationResult,
};
