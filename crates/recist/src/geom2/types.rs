//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes the parallel-segment epsilon and the ray length factor.
//! - `Axis`: a measured diameter (two endpoints plus length).
//! - `Bounds2`: axis-aligned bounding box.

use nalgebra::Vector2;

use super::util::distance;
use crate::error::ConfigError;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Relative parallel test: `|r × s| <= eps_parallel * |r| * |s|` means parallel.
    /// This is the sine of the smallest angle still treated as crossing.
    pub eps_parallel: f64,
    /// Ray half-length in units of the hull's bounding-box diagonal. Must be >= 1
    /// for the ray to span the whole hull from any hull point.
    pub ray_scale: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_parallel: 1e-12,
            ray_scale: 2.0,
        }
    }
}

impl GeomCfg {
    /// Check ranges: `eps_parallel >= 0`, `ray_scale >= 1`, both finite.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(self.eps_parallel.is_finite() && self.eps_parallel >= 0.0) {
            return Err(ConfigError::EpsParallel(self.eps_parallel));
        }
        if !(self.ray_scale.is_finite() && self.ray_scale >= 1.0) {
            return Err(ConfigError::RayScale(self.ray_scale));
        }
        Ok(self)
    }
}

/// A measured diameter: endpoints `start`, `end` and their distance.
///
/// For the minor axis `start` is the hull vertex the ray was cast from and
/// `end` is the intersection on the opposite edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axis {
    pub start: Vector2<f64>,
    pub end: Vector2<f64>,
    pub length: f64,
}

impl Axis {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self {
            start,
            end,
            length: distance(start, end),
        }
    }
    /// Direction `end - start` (not normalized).
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }
}

/// Axis-aligned bounds `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Bounds2 {
    /// Bounds of a point set; `None` when empty.
    pub fn of(points: &[Vector2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut b = Self {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }
    #[inline]
    pub fn diagonal(&self) -> f64 {
        distance(self.min, self.max)
    }
}
