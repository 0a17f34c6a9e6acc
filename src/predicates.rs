//! Exact-sign geometric predicates used by the partition algorithms.
//!
//! Every test is a sign check on a single cross product, with no tolerance.
//! Turns are measured for a counter-clockwise ring: a positive cross product
//! at `b` for the walk `a → b → c` is a convex (left) turn.
//!
//! A collinear triple is neither convex nor reflex. Callers that need a
//! complement must pick the side they want explicitly.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Twice the signed area of the triangle `a, b, c`.
///
/// Positive when `a → b → c` turns left (convex at `b` on a CCW ring),
/// negative when it turns right, zero when the points are collinear.
///
/// # Example
///
/// ```
/// use polypart::{orientation, Point2};
///
/// let a = Point2::new(0.0, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// assert!(orientation(a, b, Point2::new(1.0, 1.0)) > 0.0);
/// assert!(orientation(a, b, Point2::new(1.0, -1.0)) < 0.0);
/// assert_eq!(orientation(a, b, Point2::new(2.0, 0.0)), 0.0);
/// ```
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> F {
    (b - a).cross(c - a)
}

/// Returns `true` if `a → b → c` is a strict left turn.
#[inline]
pub fn is_convex<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    orientation(a, b, c) > F::zero()
}

/// Returns `true` if `a → b → c` is a strict right turn.
#[inline]
pub fn is_reflex<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    orientation(a, b, c) < F::zero()
}

/// Tests whether `p` lies in the CCW triangle `a, b, c`.
///
/// `p` is rejected when it is strictly on the outer side of any edge.
/// A point on an edge (or its supporting line, inside the other two
/// half-planes) is reported as contained, so it blocks an ear whose
/// diagonal would pass through it.
#[inline]
pub fn point_in_triangle<F: Float>(
    a: Point2<F>,
    b: Point2<F>,
    c: Point2<F>,
    p: Point2<F>,
) -> bool {
    !(is_convex(a, p, b) || is_convex(b, p, c) || is_convex(c, p, a))
}

/// Tests whether `p` lies in the interior cone at `cur`, bounded by the
/// edges `prev → cur` and `cur → next`.
///
/// For a convex corner `p` has to be on the inner side of both edges; for a
/// reflex corner the inner side of either edge is enough.
pub fn in_cone<F: Float>(
    prev: Point2<F>,
    cur: Point2<F>,
    next: Point2<F>,
    p: Point2<F>,
) -> bool {
    if is_convex(prev, cur, next) {
        is_convex(prev, cur, p) && is_convex(cur, next, p)
    } else {
        is_convex(prev, cur, p) || is_convex(cur, next, p)
    }
}

/// Tests whether the open segments `p1–p2` and `q1–q2` properly cross.
///
/// Segments that share an endpoint never intersect. Touching (an endpoint
/// lying on the other segment) and collinear overlap are not proper
/// crossings either.
pub fn segments_intersect<F: Float>(
    p1: Point2<F>,
    p2: Point2<F>,
    q1: Point2<F>,
    q2: Point2<F>,
) -> bool {
    if p1 == q1 || p1 == q2 || p2 == q1 || p2 == q2 {
        return false;
    }

    let d1 = orientation(p1, p2, q1);
    let d2 = orientation(p1, p2, q2);
    if d1 * d2 >= F::zero() {
        return false;
    }

    let d3 = orientation(q1, q2, p1);
    let d4 = orientation(q1, q2, p2);
    d3 * d4 < F::zero()
}

/// Returns `v` scaled to unit length; the zero vector stays zero.
#[inline]
pub fn normalize<F: Float>(v: Vec2<F>) -> Vec2<F> {
    v.normalize().unwrap_or_else(Vec2::zero)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<F: Float>(a: Point2<F>, b: Point2<F>) -> F {
    a.distance(b)
}
