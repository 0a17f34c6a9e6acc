//! Core polygon types and basic operations.

use crate::predicates::is_reflex;
use crate::primitives::Point2;
use num_traits::Float;

/// Rotational direction in which a polygon's vertices are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero signed area (fewer than three vertices, or all collinear).
    Degenerate,
}

/// A simple polygon represented as a cyclic sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the
/// first). The partition algorithms expect counter-clockwise winding; use
/// [`Polygon::set_orientation`] to normalize input of unknown winding.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    /// The vertices of the polygon.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon.
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Creates a triangle.
    #[inline]
    pub fn triangle(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self {
            vertices: vec![a, b, c],
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        polygon_signed_area(&self.vertices)
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Tests if no corner turns right on a counter-clockwise walk.
    ///
    /// Collinear corners are allowed. A clockwise polygon with three or more
    /// vertices is never convex under this rule, matching what
    /// [`convex_partition`](crate::polygon::convex_partition) accepts
    /// unchanged.
    pub fn is_convex(&self) -> bool {
        !self.has_reflex_vertex()
    }

    /// Returns the winding of the polygon, derived from its signed area.
    pub fn orientation(&self) -> Winding {
        let area = self.signed_area();
        if area > F::zero() {
            Winding::CounterClockwise
        } else if area < F::zero() {
            Winding::Clockwise
        } else {
            Winding::Degenerate
        }
    }

    /// Reorders the vertices so the polygon has the requested winding.
    ///
    /// Degenerate polygons have no winding to flip and are left untouched,
    /// as is a request for [`Winding::Degenerate`].
    pub fn set_orientation(&mut self, winding: Winding) {
        let current = self.orientation();
        if current != Winding::Degenerate && winding != Winding::Degenerate && current != winding
        {
            self.vertices.reverse();
        }
    }

    /// Returns a copy of the polygon with the requested winding.
    pub fn with_orientation(&self, winding: Winding) -> Self {
        let mut polygon = self.clone();
        polygon.set_orientation(winding);
        polygon
    }

    /// Returns a polygon with reversed winding order.
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self { vertices }
    }

    /// Iterates over `(previous, vertex, next)` triples, one per vertex.
    pub(crate) fn corners(&self) -> impl Iterator<Item = (Point2<F>, Point2<F>, Point2<F>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| {
            (
                self.vertices[(i + n - 1) % n],
                self.vertices[i],
                self.vertices[(i + 1) % n],
            )
        })
    }

    /// Returns true if any vertex is a strict right turn.
    pub(crate) fn has_reflex_vertex(&self) -> bool {
        self.corners().any(|(a, b, c)| is_reflex(a, b, c))
    }
}

/// Computes the signed area of a polygon using the shoelace formula.
///
/// Positive for CCW winding, negative for CW winding.
pub fn polygon_signed_area<F: Float>(vertices: &[Point2<F>]) -> F {
    if vertices.len() < 3 {
        return F::zero();
    }

    let mut area = F::zero();
    let n = vertices.len();

    for i in 0..n {
        let j = (i + 1) % n;
        area = area + vertices[i].x * vertices[j].y;
        area = area - vertices[j].x * vertices[i].y;
    }

    area / F::from(2.0).unwrap()
}

/// Computes the absolute area of a polygon.
pub fn polygon_area<F: Float>(vertices: &[Point2<F>]) -> F {
    polygon_signed_area(vertices).abs()
}
