use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::Bounds2;
use super::util::cross;

/// Convex hull of a contour, counter-clockwise, starting at the lowest-x (then lowest-y) point.
///
/// Invariants:
/// - No duplicate points; the closing point is not repeated.
/// - For 3+ points every consecutive triple (wrapping) is a strict left turn.
/// - 1 or 2 points only when the input has that many distinct points, or is collinear.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    pts: Vec<Vector2<f64>>,
}

impl Hull {
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.pts
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }
    /// Edges `(hull[i], hull[(i+1) % n])` in boundary order.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }
    /// Axis-aligned bounds; `None` for an empty hull.
    #[inline]
    pub fn bounds(&self) -> Option<Bounds2> {
        Bounds2::of(&self.pts)
    }
}

/// Andrew's monotone chain convex hull (returns hull in CCW order).
///
/// Lower chain left to right, then upper chain right to left, popping while the
/// last two points and the candidate make a non-left turn (`cross <= 0`), so
/// collinear boundary points are dropped. Exact duplicates are removed first.
pub fn convex_hull(points: &[Vector2<f64>]) -> Hull {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    if pts.len() < 3 {
        return Hull { pts };
    }
    let mut hull: Vec<Vector2<f64>> = Vec::with_capacity(pts.len() + 1);
    for p in &pts {
        while hull.len() >= 2 && turn(&hull, *p) <= 0.0 {
            hull.pop();
        }
        hull.push(*p);
    }
    let lower_len = hull.len();
    // The rightmost point already ends the lower chain.
    for p in pts.iter().rev().skip(1) {
        while hull.len() > lower_len && turn(&hull, *p) <= 0.0 {
            hull.pop();
        }
        hull.push(*p);
    }
    // last point repeats the first
    hull.pop();
    Hull { pts: hull }
}

/// Turn of `(second-to-last, last, p)`; positive for a strict left turn.
#[inline]
fn turn(chain: &[Vector2<f64>], p: Vector2<f64>) -> f64 {
    let a = chain[chain.len() - 2];
    let b = chain[chain.len() - 1];
    cross(b - a, p - b)
}
