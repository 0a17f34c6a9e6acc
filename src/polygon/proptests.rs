use super::*;
use crate::primitives::Point2;
use approx::assert_relative_eq;
use proptest::prelude::*;
use std::f64::consts::TAU;

/// CCW polygon whose vertices sit in equal angular slots around the origin.
///
/// Each vertex is jittered within the middle half of its slot, so no two
/// consecutive vertices are more than half a turn apart and the origin stays
/// in the kernel.
fn radial_polygon(jitter: &[f64], radii: &[f64]) -> Polygon<f64> {
    let n = jitter.len() as f64;
    Polygon::new(
        jitter
            .iter()
            .zip(radii)
            .enumerate()
            .map(|(k, (&t, &r))| {
                let angle = (k as f64 + t) * TAU / n;
                Point2::new(r * angle.cos(), r * angle.sin())
            })
            .collect(),
    )
}

fn star_polygon() -> impl Strategy<Value = Polygon<f64>> {
    (3usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(0.25f64..0.75, n),
            prop::collection::vec(2.0f64..10.0, n),
        )
            .prop_map(|(jitter, radii)| radial_polygon(&jitter, &radii))
    })
}

fn convex_polygon() -> impl Strategy<Value = Polygon<f64>> {
    (3usize..12, 1.0f64..10.0).prop_flat_map(|(n, r)| {
        prop::collection::vec(0.25f64..0.75, n)
            .prop_map(move |jitter| radial_polygon(&jitter, &vec![r; jitter.len()]))
    })
}

proptest! {
    #[test]
    fn triangulation_has_n_minus_two_triangles(polygon in star_polygon()) {
        let triangles = triangulate(&polygon).unwrap();
        prop_assert_eq!(triangles.len(), polygon.len() - 2);
    }

    #[test]
    fn triangulation_preserves_area(polygon in star_polygon()) {
        let triangles = triangulate(&polygon).unwrap();
        assert_relative_eq!(
            triangulation_area(&triangles),
            polygon.area(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn triangle_indices_are_distinct_and_in_range(polygon in star_polygon()) {
        let result = triangulate_indexed(&polygon).unwrap();
        for &(a, b, c) in &result.indices {
            prop_assert!(a < polygon.len() && b < polygon.len() && c < polygon.len());
            prop_assert!(a != b && b != c && a != c);
        }
    }

    #[test]
    fn triangulation_is_deterministic(polygon in star_polygon()) {
        prop_assert_eq!(triangulate(&polygon).unwrap(), triangulate(&polygon).unwrap());
    }

    #[test]
    fn partition_regions_are_convex(polygon in star_polygon()) {
        let parts = convex_partition(&polygon).unwrap();
        for part in &parts {
            prop_assert_eq!(count_reflex_vertices(part), 0);
        }
    }

    #[test]
    fn partition_never_exceeds_triangle_count(polygon in star_polygon()) {
        let parts = convex_partition(&polygon).unwrap();
        prop_assert!(!parts.is_empty());
        prop_assert!(parts.len() <= polygon.len() - 2);
    }

    #[test]
    fn partition_preserves_area(polygon in star_polygon()) {
        let parts = convex_partition(&polygon).unwrap();
        assert_relative_eq!(
            triangulation_area(&parts),
            polygon.area(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn convex_polygon_is_its_own_partition(polygon in convex_polygon()) {
        prop_assert_eq!(convex_partition(&polygon).unwrap(), vec![polygon]);
    }

    #[test]
    fn orientation_round_trips(polygon in star_polygon()) {
        prop_assert_eq!(polygon.orientation(), Winding::CounterClockwise);

        let reversed = polygon.reversed();
        prop_assert_eq!(reversed.orientation(), Winding::Clockwise);
        prop_assert_eq!(reversed.with_orientation(Winding::CounterClockwise), polygon);
    }
}
