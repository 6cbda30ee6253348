use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;

fn square4() -> Vec<Vector2<f64>> {
    vec![
        vector![0.0, 4.0],
        vector![4.0, 4.0],
        vector![0.0, 0.0],
        vector![4.0, 0.0],
    ]
}

#[test]
fn cross_sign_and_distance() {
    let x = vector![1.0, 0.0];
    let y = vector![0.0, 1.0];
    assert!(cross(x, y) > 0.0);
    assert!(cross(y, x) < 0.0);
    assert_eq!(cross(x, x * 3.0), 0.0);
    assert!((distance(vector![1.0, 1.0], vector![4.0, 5.0]) - 5.0).abs() < 1e-12);
    assert!(unit(Vector2::zeros()).is_none());
    let u = unit(vector![3.0, 4.0]).unwrap();
    assert!((u - vector![0.6, 0.8]).norm() < 1e-12);
}

#[test]
fn geom_cfg_range_checks() {
    use crate::error::ConfigError;
    assert!(GeomCfg::default().validated().is_ok());
    let cfg = |eps_parallel, ray_scale| GeomCfg {
        eps_parallel,
        ray_scale,
    };
    assert_eq!(cfg(0.0, 1.0).validated(), Ok(cfg(0.0, 1.0)));
    assert_eq!(
        cfg(-1e-9, 2.0).validated(),
        Err(ConfigError::EpsParallel(-1e-9))
    );
    assert_eq!(cfg(1e-12, 0.5).validated(), Err(ConfigError::RayScale(0.5)));
    assert!(cfg(f64::NAN, 2.0).validated().is_err());
    assert!(cfg(1e-12, f64::INFINITY).validated().is_err());
}

#[test]
fn hull_square_is_ccw_from_lowest_x() {
    let h = convex_hull(&square4());
    assert_eq!(
        h.points(),
        &[
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0]
        ]
    );
}

#[test]
fn hull_triangle_keeps_all_vertices() {
    let h = convex_hull(&[vector![1.0, 2.0], vector![0.0, 0.0], vector![2.0, 0.0]]);
    assert_eq!(
        h.points(),
        &[vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 2.0]]
    );
}

#[test]
fn hull_prunes_interior_and_collinear_points() {
    let mut pts = square4();
    pts.push(vector![2.0, 0.0]); // on the bottom edge
    pts.push(vector![4.0, 1.0]); // on the right edge
    pts.push(vector![2.0, 2.0]); // interior
    pts.push(vector![4.0, 4.0]); // duplicate corner
    let h = convex_hull(&pts);
    assert_eq!(h.len(), 4);
    assert_eq!(h, convex_hull(&square4()));
}

#[test]
fn hull_degenerate_inputs() {
    let p = vector![1.0, 1.0];
    assert_eq!(convex_hull(&[p, p]).points(), &[p]);
    assert!(convex_hull(&[]).is_empty());
    let two = convex_hull(&[vector![3.0, 0.0], vector![1.0, 0.0]]);
    assert_eq!(two.points(), &[vector![1.0, 0.0], vector![3.0, 0.0]]);
    // all collinear collapses to the two extremes
    let line = convex_hull(&[
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![1.0, 1.0],
        vector![3.0, 3.0],
    ]);
    assert_eq!(line.points(), &[vector![0.0, 0.0], vector![3.0, 3.0]]);
}

#[test]
fn hull_edges_wrap_and_bounds() {
    let h = convex_hull(&square4());
    let edges: Vec<_> = h.edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3], (vector![0.0, 4.0], vector![0.0, 0.0]));
    let b = h.bounds().unwrap();
    assert_eq!(b.min, vector![0.0, 0.0]);
    assert_eq!(b.max, vector![4.0, 4.0]);
    assert!((b.diagonal() - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[test]
fn segments_crossing_at_known_point() {
    let eps = GeomCfg::default().eps_parallel;
    let q = segment_intersection(
        vector![0.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![4.0, 0.0],
        eps,
    )
    .unwrap();
    assert!((q - vector![2.0, 2.0]).norm() < 1e-12);
    // touching at an endpoint counts
    let e = segment_intersection(
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 5.0],
        eps,
    )
    .unwrap();
    assert!((e - vector![2.0, 0.0]).norm() < 1e-12);
    // lines cross, segments do not
    assert!(segment_intersection(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, -1.0],
        vector![2.0, 1.0],
        eps,
    )
    .is_none());
}

#[test]
fn parallel_and_collinear_segments_do_not_intersect() {
    let eps = GeomCfg::default().eps_parallel;
    assert!(segment_intersection(
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![0.0, 1.0],
        vector![4.0, 1.0],
        eps,
    )
    .is_none());
    // overlapping collinear segments are reported as no intersection
    assert!(segment_intersection(
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![1.0, 0.0],
        vector![6.0, 0.0],
        eps,
    )
    .is_none());
    // crossing at (5e5, 0) but within the relative parallel tolerance
    let (a1, a2) = (vector![0.0, 0.0], vector![1e6, 0.0]);
    let (b1, b2) = (vector![0.0, -1e-8], vector![1e6, 1e-8]);
    assert!(segment_intersection(a1, a2, b1, b2, 1e-12).is_none());
    assert!(segment_intersection(a1, a2, b1, b2, 0.0).is_some());
}

fn arb_points() -> impl Strategy<Value = Vec<Vector2<f64>>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..50)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
}

proptest! {
    #[test]
    fn hull_contains_every_input_point(pts in arb_points()) {
        let h = convex_hull(&pts);
        prop_assume!(h.len() >= 3);
        for q in &pts {
            for (a, b) in h.edges() {
                let scale = (b - a).norm() * (q - a).norm();
                prop_assert!(cross(b - a, q - a) >= -1e-9 * scale.max(1.0));
            }
        }
    }

    #[test]
    fn hull_turns_strictly_left(pts in arb_points()) {
        let h = convex_hull(&pts);
        let n = h.len();
        prop_assume!(n >= 3);
        let p = h.points();
        for i in 0..n {
            let (a, b, c) = (p[i], p[(i + 1) % n], p[(i + 2) % n]);
            prop_assert!(cross(b - a, c - b) > 0.0);
        }
    }

    #[test]
    fn hull_vertices_come_from_input(pts in arb_points()) {
        let h = convex_hull(&pts);
        prop_assert!(h.points().iter().all(|v| pts.contains(v)));
    }
}
