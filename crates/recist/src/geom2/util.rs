use nalgebra::Vector2;

/// 2D cross product `a.x*b.y - a.y*b.x`.
/// Positive when `b` is counter-clockwise from `a`, zero when collinear.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Euclidean distance `|a - b|`.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Unit vector along `v`; `None` for zero or non-finite input.
#[inline]
pub fn unit(v: Vector2<f64>) -> Option<Vector2<f64>> {
    let norm = v.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return None;
    }
    Some(v / norm)
}
