use nalgebra::Vector2;

use super::util::cross;

/// Intersection of closed segments `[a1, a2]` and `[b1, b2]`.
///
/// Solves `a1 + t r = b1 + u s` with `r = a2 - a1`, `s = b2 - b1`. Returns the
/// point when `t, u ∈ [0, 1]` (endpoints count). Parallel segments, including
/// collinear overlapping ones, report `None`: parallel means
/// `|r × s| <= eps_parallel * |r| * |s|`. Zero-length segments are parallel to everything.
pub fn segment_intersection(
    a1: Vector2<f64>,
    a2: Vector2<f64>,
    b1: Vector2<f64>,
    b2: Vector2<f64>,
    eps_parallel: f64,
) -> Option<Vector2<f64>> {
    let r = a2 - a1;
    let s = b2 - b1;
    let rxs = cross(r, s);
    if rxs.abs() <= eps_parallel * r.norm() * s.norm() {
        return None;
    }
    let w = b1 - a1;
    let t = cross(w, s) / rxs;
    let u = cross(w, r) / rxs;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a1 + r * t)
    } else {
        None
    }
}
