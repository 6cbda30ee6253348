use nalgebra::Vector2;

use crate::error::AxisError;
use crate::geom2::{cross, segment_intersection, unit, Axis, GeomCfg, Hull};

/// Longest normal-direction chord across the hull relative to `major`.
///
/// Sources are hull points strictly left of the major axis (`cross > 0`).
/// Targets are hull edges whose far endpoint is on or right of it (`cross <= 0`).
/// Points on the axis line are never sources, while edges touching it can be targets.
/// From each source a ray segment is cast along the unit normal of the
/// major axis, `ray_scale` bounding-box diagonals to either side; the farthest
/// ray/edge intersection over all sources wins (first one on ties).
pub fn minor_axis(hull: &Hull, major: &Axis, cfg: &GeomCfg) -> Result<Axis, AxisError> {
    let no_minor = || AxisError::NoMinorAxis { major: *major };
    let dir = major.direction();
    let normal = unit(Vector2::new(-dir.y, dir.x)).ok_or_else(no_minor)?;
    let reach = hull.bounds().ok_or_else(no_minor)?.diagonal() * cfg.ray_scale;
    let ray = normal * reach;
    let side = |p: Vector2<f64>| cross(dir, p - major.start);

    let mut best: Option<Axis> = None;
    for &src in hull.points().iter().filter(|&&p| side(p) > 0.0) {
        for (a, b) in hull.edges().filter(|&(_, b)| side(b) <= 0.0) {
            let Some(hit) = segment_intersection(src - ray, src + ray, a, b, cfg.eps_parallel)
            else {
                continue;
            };
            let cand = Axis::new(src, hit);
            if cand.length > best.map_or(0.0, |m| m.length) {
                best = Some(cand);
            }
        }
    }
    best.ok_or_else(no_minor)
}
