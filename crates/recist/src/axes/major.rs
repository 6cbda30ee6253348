use crate::error::AxisError;
use crate::geom2::{Axis, Hull};

/// Longest distance between two hull points (exhaustive, O(n²)).
///
/// Pairs are visited as `i` ascending then `j > i` ascending; only a strictly
/// longer pair replaces the current best, so the first maximal pair is kept.
pub fn major_axis(hull: &Hull) -> Result<Axis, AxisError> {
    let pts = hull.points();
    if pts.len() < 2 {
        return Err(AxisError::InsufficientPoints { found: pts.len() });
    }
    let mut best = Axis::new(pts[0], pts[1]);
    for (i, &a) in pts.iter().enumerate() {
        for &b in &pts[i + 1..] {
            let cand = Axis::new(a, b);
            if cand.length > best.length {
                best = cand;
            }
        }
    }
    Ok(best)
}
