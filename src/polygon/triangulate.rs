//! Polygon triangulation using ear clipping.
//!
//! Converts a simple counter-clockwise polygon into `n - 2` triangles that
//! exactly cover it.
//!
//! # Algorithm
//!
//! The vertices are threaded into a ring stored in a flat arena; each slot
//! links to its neighbours by index. Every vertex carries:
//! - whether it is an ear: a strictly convex corner (reflex and collinear
//!   corners never qualify) with no other active vertex inside or on the
//!   triangle it forms with its neighbours
//! - an ear quality score, the cosine of its interior angle
//!
//! Each step clips the ear with the highest score (the sharpest one; the
//! first in arena order on ties), unlinks it and re-evaluates only its two
//! neighbours. When no ear is left before the ring is down to a triangle
//! the input is not a simple CCW polygon and the whole call fails.
//!
//! # Complexity
//!
//! - Time: O(n²) for a polygon with n vertices
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use polypart::polygon::{triangulate, Polygon};
//! use polypart::Point2;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let triangles = triangulate(&square).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

use crate::error::PartitionError;
use crate::polygon::Polygon;
use crate::predicates::{is_convex, normalize, point_in_triangle};
use crate::primitives::Point2;
use log::{debug, trace};
use num_traits::Float;

/// Result of polygon triangulation with vertex indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangulationResult {
    /// Triangle vertex indices. Each triple (i, j, k) represents a triangle
    /// using vertices from the original polygon, in `(previous, ear, next)`
    /// order.
    pub indices: Vec<(usize, usize, usize)>,
}

impl TriangulationResult {
    /// Returns the number of triangles.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if there are no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolves the index triples against the polygon they were computed from.
    pub fn to_polygons<F: Float>(&self, polygon: &Polygon<F>) -> Vec<Polygon<F>> {
        self.indices
            .iter()
            .map(|&(i, j, k)| {
                Polygon::triangle(
                    polygon.vertices[i],
                    polygon.vertices[j],
                    polygon.vertices[k],
                )
            })
            .collect()
    }
}

/// Triangulates a polygon using the ear clipping algorithm.
///
/// The polygon must be simple and wound counter-clockwise. Returns
/// `n - 2` triangles for `n >= 3` vertices, the polygon itself for a
/// triangle, and nothing for fewer than three vertices.
///
/// # Errors
///
/// [`PartitionError::TriangulationStalled`] if an ear cannot be found at
/// some step. No partial result is returned.
///
/// # Example
///
/// ```
/// use polypart::polygon::{triangulate, Polygon};
/// use polypart::Point2;
///
/// // L-shaped polygon (concave)
/// let l_shape = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 2.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(2.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
///
/// let triangles = triangulate(&l_shape).unwrap();
/// assert_eq!(triangles.len(), 4); // 6 vertices -> 4 triangles
/// ```
pub fn triangulate<F: Float>(polygon: &Polygon<F>) -> Result<Vec<Polygon<F>>, PartitionError> {
    if polygon.len() == 3 {
        return Ok(vec![polygon.clone()]);
    }

    let result = triangulate_indexed(polygon)?;
    Ok(result.to_polygons(polygon))
}

/// Triangulates a polygon and returns vertex indices.
///
/// Same algorithm and failure mode as [`triangulate`], without copying
/// vertex data.
///
/// # Example
///
/// ```
/// use polypart::polygon::{triangulate_indexed, Polygon};
/// use polypart::Point2;
///
/// let pentagon = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.5, 1.5),
///     Point2::new(1.0, 2.5),
///     Point2::new(-0.5, 1.5),
/// ]);
///
/// let result = triangulate_indexed(&pentagon).unwrap();
/// assert_eq!(result.len(), 3);
/// for (i, j, k) in &result.indices {
///     assert!(*i < 5 && *j < 5 && *k < 5);
/// }
/// ```
pub fn triangulate_indexed<F: Float>(
    polygon: &Polygon<F>,
) -> Result<TriangulationResult, PartitionError> {
    let n = polygon.len();

    if n < 3 {
        return Ok(TriangulationResult {
            indices: Vec::new(),
        });
    }

    if n == 3 {
        return Ok(TriangulationResult {
            indices: vec![(0, 1, 2)],
        });
    }

    let mut ring = EarRing::new(&polygon.vertices);
    let mut indices = Vec::with_capacity(n - 2);
    let clips = n - 3;

    for clipped in 0..clips {
        let ear = match ring.best_ear() {
            Some(ear) => ear,
            None => {
                debug!(
                    "ear clipping stalled with {} of {} vertices left",
                    n - clipped,
                    n
                );
                return Err(PartitionError::TriangulationStalled {
                    remaining: n - clipped,
                    clipped,
                });
            }
        };

        let (prev, next) = ring.clip(ear);
        trace!("clipped ear {} between {} and {}", ear, prev, next);
        indices.push((prev, ear, next));

        // The last clip leaves a bare triangle; its flags are never read.
        if clipped + 1 < clips {
            ring.update(prev);
            ring.update(next);
        }
    }

    if let Some(v) = ring.first_active() {
        let slot = &ring.slots[v];
        indices.push((slot.prev, v, slot.next));
    }

    debug!("triangulated {} vertices into {} triangles", n, indices.len());
    Ok(TriangulationResult { indices })
}

/// Triangulates several independent polygons into one list.
///
/// All-or-nothing: the first polygon that stalls aborts the whole call.
///
/// # Example
///
/// ```
/// use polypart::polygon::{triangulate_all, Polygon};
/// use polypart::Point2;
///
/// let a = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ]);
/// let b = Polygon::new(vec![
///     Point2::new(5.0, 0.0),
///     Point2::new(6.0, 0.0),
///     Point2::new(5.5, 1.0),
/// ]);
///
/// let triangles = triangulate_all(&[a, b]).unwrap();
/// assert_eq!(triangles.len(), 3);
/// ```
pub fn triangulate_all<F: Float>(
    polygons: &[Polygon<F>],
) -> Result<Vec<Polygon<F>>, PartitionError> {
    let mut triangles = Vec::new();
    for polygon in polygons {
        triangles.extend(triangulate(polygon)?);
    }
    Ok(triangles)
}

/// Computes the total area of a set of pieces.
///
/// Useful for verifying that a triangulation or partition covers the
/// original polygon.
pub fn triangulation_area<F: Float>(pieces: &[Polygon<F>]) -> F {
    pieces
        .iter()
        .map(|piece| piece.area())
        .fold(F::zero(), |a, b| a + b)
}

/// Per-vertex ear clipping state.
#[derive(Debug, Clone, Copy)]
struct RingSlot<F> {
    point: Point2<F>,
    active: bool,
    ear: bool,
    /// Cosine of the interior angle; larger is sharper.
    quality: F,
    prev: usize,
    next: usize,
}

/// Shrinking vertex ring. Slot `i` holds input vertex `i`; removed vertices
/// stay in place with `active` cleared.
struct EarRing<F> {
    slots: Vec<RingSlot<F>>,
}

impl<F: Float> EarRing<F> {
    fn new(points: &[Point2<F>]) -> Self {
        let n = points.len();
        let slots = points
            .iter()
            .enumerate()
            .map(|(i, &point)| RingSlot {
                point,
                active: true,
                ear: false,
                quality: F::zero(),
                prev: (i + n - 1) % n,
                next: (i + 1) % n,
            })
            .collect();

        let mut ring = Self { slots };
        for i in 0..n {
            ring.update(i);
        }
        ring
    }

    /// Recomputes ear quality and ear status of slot `i`.
    fn update(&mut self, i: usize) {
        let slot = self.slots[i];
        let a = self.slots[slot.prev].point;
        let b = slot.point;
        let c = self.slots[slot.next].point;

        let quality = normalize(a - b).dot(normalize(c - b));
        let ear = is_convex(a, b, c) && !self.blocks_ear(a, b, c);

        let slot = &mut self.slots[i];
        slot.quality = quality;
        slot.ear = ear;
    }

    /// True if an active vertex other than the corners lies in `a, b, c`.
    fn blocks_ear(&self, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
        self.slots
            .iter()
            .filter(|s| s.active)
            .map(|s| s.point)
            .filter(|&p| p != a && p != b && p != c)
            .any(|p| point_in_triangle(a, b, c, p))
    }

    /// The active ear with the highest quality; the first one wins ties.
    fn best_ear(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, slot) in self.slots.iter().enumerate() {
            if !slot.active || !slot.ear {
                continue;
            }
            match best {
                Some(b) if slot.quality <= self.slots[b].quality => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Unlinks slot `i` from the ring and returns its former neighbours.
    fn clip(&mut self, i: usize) -> (usize, usize) {
        let RingSlot { prev, next, .. } = self.slots[i];
        self.slots[i].active = false;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
        (prev, next)
    }

    fn first_active(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn poly(coords: &[(f64, f64)]) -> Polygon<f64> {
        Polygon::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    fn square() -> Polygon<f64> {
        poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    }

    fn l_shape() -> Polygon<f64> {
        poly(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 2.0),
            (2.0, 2.0),
            (2.0, 4.0),
            (0.0, 4.0),
        ])
    }

    /// Even-odd ray cast; boundary points may go either way.
    fn contains(polygon: &Polygon<f64>, p: Point2<f64>) -> bool {
        let v = &polygon.vertices;
        let mut inside = false;
        let mut j = v.len() - 1;
        for i in 0..v.len() {
            if (v[i].y > p.y) != (v[j].y > p.y)
                && p.x < (v[j].x - v[i].x) * (p.y - v[i].y) / (v[j].y - v[i].y) + v[i].x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// Every triangle is CCW, non-degenerate and has its centroid inside
    /// the polygon; together they cover its area.
    fn assert_valid_triangulation(polygon: &Polygon<f64>, triangles: &[Polygon<f64>]) {
        assert_eq!(triangles.len(), polygon.len() - 2);
        for t in triangles {
            assert_eq!(t.len(), 3);
            assert!(t.signed_area() > 0.0, "degenerate or CW triangle {:?}", t);
            let [a, b, c] = [t.vertices[0], t.vertices[1], t.vertices[2]];
            let centroid = Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
            assert!(contains(polygon, centroid), "triangle {:?} leaves polygon", t);
        }
        assert_relative_eq!(triangulation_area(triangles), polygon.area(), epsilon = 1e-9);
    }

    #[test]
    fn test_triangulate_triangle() {
        let tri = poly(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)]);
        let result = triangulate(&tri).unwrap();
        assert_eq!(result, vec![tri]);
    }

    #[test]
    fn test_triangulate_square() {
        let sq = square();
        let result = triangulate(&sq).unwrap();
        assert_valid_triangulation(&sq, &result);
        // All corners tie at 90°; the first slot is clipped first.
        assert_eq!(
            result[0].vertices,
            vec![
                Point2::new(0.0, 4.0),
                Point2::new(0.0, 0.0),
                Point2::new(4.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_triangulate_l_shape() {
        let l = l_shape();
        let result = triangulate(&l).unwrap();
        assert_valid_triangulation(&l, &result);
    }

    #[test]
    fn test_l_shape_reflex_vertex_blocks_corner_ear() {
        // The ear at (0,0) would have its diagonal run through (2,2).
        let indexed = triangulate_indexed(&l_shape()).unwrap();
        assert_eq!(
            indexed.indices,
            vec![(0, 1, 2), (0, 2, 3), (5, 0, 3), (5, 3, 4)]
        );
    }

    #[test]
    fn test_sharpest_ear_first() {
        // A long thin spike at (10,1): its cosine is near 1.
        let spiked = poly(&[(0.0, 0.0), (2.0, 0.0), (10.0, 1.0), (2.0, 2.0), (0.0, 2.0)]);
        let indexed = triangulate_indexed(&spiked).unwrap();
        assert_eq!(indexed.indices[0], (1, 2, 3));
    }

    #[test]
    fn test_triangulate_pentagon() {
        let pentagon = poly(&[(0.0, 0.0), (2.0, 0.0), (2.5, 1.5), (1.0, 2.5), (-0.5, 1.5)]);
        let result = triangulate(&pentagon).unwrap();
        assert_valid_triangulation(&pentagon, &result);
    }

    #[test]
    fn test_triangulate_star() {
        let star = poly(&[
            (0.0, 3.0),
            (-1.0, 1.0),
            (-3.0, 1.0),
            (-1.5, 0.0),
            (-2.0, -2.0),
            (0.0, -0.5),
            (2.0, -2.0),
            (1.5, 0.0),
            (3.0, 1.0),
            (1.0, 1.0),
        ]);
        assert_eq!(star.orientation(), crate::polygon::Winding::CounterClockwise);
        let result = triangulate(&star).unwrap();
        assert_valid_triangulation(&star, &result);
    }

    #[test]
    fn test_triangulate_arrow() {
        let arrow = poly(&[
            (0.0, 2.0),
            (-1.0, 0.0),
            (-0.5, 0.0),
            (-0.5, -1.0),
            (0.5, -1.0),
            (0.5, 0.0),
            (1.0, 0.0),
        ]);
        let result = triangulate(&arrow).unwrap();
        assert_valid_triangulation(&arrow, &result);
    }

    #[test]
    fn test_triangulate_comb() {
        // Several reflex vertices in a row.
        let comb = poly(&[
            (0.0, 0.0),
            (7.0, 0.0),
            (7.0, 3.0),
            (6.0, 3.0),
            (5.5, 1.0),
            (5.0, 3.0),
            (4.0, 3.0),
            (3.5, 1.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (1.5, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ]);
        let result = triangulate(&comb).unwrap();
        assert_valid_triangulation(&comb, &result);
    }

    #[test]
    fn test_triangulate_with_collinear_vertex() {
        let poly = poly(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let result = triangulate(&poly).unwrap();
        assert_eq!(result.len(), 3);
        assert_relative_eq!(triangulation_area(&result), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_triangulate_empty() {
        let empty: Polygon<f64> = Polygon::empty();
        assert!(triangulate(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_triangulate_two_vertices() {
        let line = poly(&[(0.0, 0.0), (1.0, 0.0)]);
        assert!(triangulate(&line).unwrap().is_empty());
        assert!(triangulate_indexed(&line).unwrap().is_empty());
    }

    #[test]
    fn test_triangulate_collinear_triple() {
        let flat = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let result = triangulate(&flat).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], flat);
    }

    #[test]
    fn test_triangulate_all_collinear_stalls() {
        let flat = poly(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(
            triangulate(&flat),
            Err(PartitionError::TriangulationStalled {
                remaining: 4,
                clipped: 0
            })
        );
    }

    #[test]
    fn test_cw_polygon_stalls() {
        let cw = square().reversed();
        let err = triangulate(&cw).unwrap_err();
        assert!(matches!(
            err,
            PartitionError::TriangulationStalled { clipped: 0, .. }
        ));
    }

    #[test]
    fn test_cw_polygon_after_normalization() {
        let mut poly = l_shape().reversed();
        poly.set_orientation(crate::polygon::Winding::CounterClockwise);
        let result = triangulate(&poly).unwrap();
        assert_valid_triangulation(&poly, &result);
    }

    #[test]
    fn test_deterministic() {
        let l = l_shape();
        assert_eq!(triangulate(&l).unwrap(), triangulate(&l).unwrap());
    }

    #[test]
    fn test_triangulate_all_is_all_or_nothing() {
        let good = square();
        let bad = square().reversed();
        assert_eq!(triangulate_all(&[good.clone(), l_shape()]).unwrap().len(), 6);
        assert!(triangulate_all(&[good, bad]).is_err());
        assert!(triangulate_all::<f64>(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_triangulation_result_methods() {
        let result = TriangulationResult {
            indices: vec![(0, 1, 2), (0, 2, 3)],
        };
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        let pieces = result.to_polygons(&square());
        assert_relative_eq!(triangulation_area(&pieces), 16.0, epsilon = 1e-12);

        let empty = TriangulationResult { indices: vec![] };
        assert!(empty.is_empty());
    }

    #[test]
    fn test_ring_clip_relinks_neighbours() {
        let sq = square();
        let mut ring = EarRing::new(&sq.vertices);
        assert!(ring.slots.iter().all(|s| s.ear));
        assert_eq!(ring.clip(1), (0, 2));
        assert_eq!(ring.slots[0].next, 2);
        assert_eq!(ring.slots[2].prev, 0);
        assert_eq!(ring.first_active(), Some(0));
    }

    #[test]
    fn test_ring_best_ear_skips_reflex() {
        let l = l_shape().vertices;
        let ring = EarRing::new(&l);
        assert!(!is_convex(l[2], l[3], l[4]));
        assert!(!ring.slots[3].ear);
        assert!(!ring.slots[0].ear);
        assert_eq!(ring.best_ear(), Some(1));
    }

    #[test]
    fn test_f32() {
        let square: Polygon<f32> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let result = triangulate(&square).unwrap();
        assert_eq!(result.len(), 2);
    }
}
