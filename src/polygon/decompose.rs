//! Convex polygon decomposition.
//!
//! Decomposes a simple counter-clockwise polygon into convex pieces with the
//! Hertel-Mehlhorn heuristic: triangulate, then greedily remove diagonals
//! whose removal leaves neither merged corner reflex. Merged pieces may
//! therefore carry collinear vertices. The result has at most
//! four times the optimal number of pieces.
//!
//! # Example
//!
//! ```
//! use polypart::polygon::{convex_partition, Polygon};
//! use polypart::Point2;
//!
//! // L-shaped polygon (non-convex)
//! let l_shape = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let parts = convex_partition(&l_shape).unwrap();
//! assert_eq!(parts.len(), 2);
//! for part in &parts {
//!     assert!(part.is_convex());
//! }
//! ```

use super::core::Polygon;
use super::triangulate::triangulate;
use crate::error::PartitionError;
use crate::predicates::is_reflex;
use crate::primitives::Point2;
use log::{debug, trace};
use num_traits::Float;

/// Per-coordinate tolerance used to match a diagonal shared by two pieces.
pub const DEFAULT_MERGE_TOLERANCE: f64 = 1e-4;

/// Decomposes a polygon into convex parts using the Hertel-Mehlhorn
/// heuristic.
///
/// Returns nothing for fewer than three vertices, and the polygon itself
/// when none of its corners is reflex. Shared diagonals are matched with
/// [`DEFAULT_MERGE_TOLERANCE`].
///
/// # Errors
///
/// Propagates [`PartitionError::TriangulationStalled`] from the
/// triangulation step.
///
/// # Example
///
/// ```
/// use polypart::polygon::{convex_partition, Polygon};
/// use polypart::Point2;
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
///     Point2::new(0.0, 4.0),
/// ]);
///
/// let parts = convex_partition(&square).unwrap();
/// assert_eq!(parts, vec![square]);
/// ```
pub fn convex_partition<F: Float>(
    polygon: &Polygon<F>,
) -> Result<Vec<Polygon<F>>, PartitionError> {
    convex_partition_with_tolerance(polygon, F::from(DEFAULT_MERGE_TOLERANCE).unwrap())
}

/// Same as [`convex_partition`] with an explicit tolerance for matching
/// shared diagonals.
///
/// `eps` absorbs drift between the copies of a vertex held by adjacent
/// pieces; two coordinates match when they differ by less than `eps`.
pub fn convex_partition_with_tolerance<F: Float>(
    polygon: &Polygon<F>,
    eps: F,
) -> Result<Vec<Polygon<F>>, PartitionError> {
    if polygon.len() < 3 {
        return Ok(vec![]);
    }

    if polygon.is_convex() {
        return Ok(vec![polygon.clone()]);
    }

    let triangles = triangulate(polygon)?;
    let triangle_count = triangles.len();
    let parts = hertel_mehlhorn_merge(triangles, eps);

    debug!(
        "merged {} triangles into {} convex parts",
        triangle_count,
        parts.len()
    );
    Ok(parts)
}

/// Returns the number of reflex (concave) vertices in a polygon.
///
/// A reflex vertex is one where the interior angle is greater than 180°.
/// Collinear vertices are not counted.
pub fn count_reflex_vertices<F: Float>(polygon: &Polygon<F>) -> usize {
    if polygon.len() < 3 {
        return 0;
    }

    polygon
        .corners()
        .filter(|&(a, b, c)| is_reflex(a, b, c))
        .count()
}

/// Returns indices of reflex (concave) vertices in a polygon.
pub fn find_reflex_vertices<F: Float>(polygon: &Polygon<F>) -> Vec<usize> {
    if polygon.len() < 3 {
        return vec![];
    }

    polygon
        .corners()
        .enumerate()
        .filter(|&(_, (a, b, c))| is_reflex(a, b, c))
        .map(|(i, _)| i)
        .collect()
}

/// Hertel-Mehlhorn algorithm: merge triangles into larger convex polygons.
///
/// Each piece is scanned edge by edge against the pieces after it. A merge
/// replaces the piece in place and restarts its scan from the first edge,
/// since the grown piece may now share removable diagonals with pieces its
/// earlier edges did not.
fn hertel_mehlhorn_merge<F: Float>(mut pieces: Vec<Polygon<F>>, eps: F) -> Vec<Polygon<F>> {
    let mut i = 0;
    while i < pieces.len() {
        let mut edge = 0;
        while edge < pieces[i].len() {
            match try_merge_across(&pieces, i, edge, eps) {
                Some((j, merged)) => {
                    trace!(
                        "merged piece {} into {} across edge {} ({} vertices)",
                        j,
                        i,
                        edge,
                        merged.len()
                    );
                    pieces[i] = merged;
                    pieces.remove(j);
                    edge = 0;
                }
                None => edge += 1,
            }
        }
        i += 1;
    }
    pieces
}

/// Tries to remove the diagonal starting at vertex `e1` of piece `i`.
///
/// Returns the index of the absorbed piece and the merged polygon, or `None`
/// when the edge is not shared with a later piece or its removal would
/// create a reflex corner. A corner that becomes a straight angle does not
/// block the merge.
fn try_merge_across<F: Float>(
    pieces: &[Polygon<F>],
    i: usize,
    e1: usize,
    eps: F,
) -> Option<(usize, Polygon<F>)> {
    let poly1 = &pieces[i].vertices;
    let n1 = poly1.len();
    let e2 = (e1 + 1) % n1;
    let (d1, d2) = (poly1[e1], poly1[e2]);

    let (j, f2, f1) = find_shared_edge(pieces, i, d1, d2, eps)?;
    let poly2 = &pieces[j].vertices;
    let n2 = poly2.len();

    // Corner at d1: piece i arrives, piece j leaves. A straight angle is
    // allowed.
    if is_reflex(poly1[(e1 + n1 - 1) % n1], d1, poly2[(f1 + 1) % n2]) {
        return None;
    }
    // Corner at d2: piece j arrives, piece i leaves.
    if is_reflex(poly2[(f2 + n2 - 1) % n2], d2, poly1[(e2 + 1) % n1]) {
        return None;
    }

    let mut merged = Vec::with_capacity(n1 + n2 - 2);
    let mut k = e2;
    while k != e1 {
        merged.push(poly1[k]);
        k = (k + 1) % n1;
    }
    let mut k = f1;
    while k != f2 {
        merged.push(poly2[k]);
        k = (k + 1) % n2;
    }

    Some((j, Polygon::new(merged)))
}

/// Finds a piece after `i` holding the reversed edge `d2 → d1`.
///
/// Returns `(j, f2, f1)` with `pieces[j][f2] ≈ d2` and `pieces[j][f1] ≈ d1`.
fn find_shared_edge<F: Float>(
    pieces: &[Polygon<F>],
    i: usize,
    d1: Point2<F>,
    d2: Point2<F>,
    eps: F,
) -> Option<(usize, usize, usize)> {
    for (j, piece) in pieces.iter().enumerate().skip(i + 1) {
        let n = piece.len();
        for f2 in 0..n {
            if !piece.vertices[f2].approx_eq(d2, eps) {
                continue;
            }
            let f1 = (f2 + 1) % n;
            if piece.vertices[f1].approx_eq(d1, eps) {
                return Some((j, f2, f1));
            }
        }
    }
    None
}
