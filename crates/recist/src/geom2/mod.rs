//! 2D geometry for contour measurement.
//!
//! Purpose
//! - Vector primitives (`cross`, `distance`, `unit`) on `nalgebra::Vector2<f64>`.
//! - Convex hull by Andrew's monotone chain, CCW, strict left turns only.
//! - Closed segment–segment intersection with a scale-relative parallel test.
//!
//! Conventions
//! - Orientation: `cross(a, b) > 0` means `b` is counter-clockwise from `a`.
//!   The minor-axis half-plane tests rely on the hull being CCW.
//! - Tolerances live in `GeomCfg`; predicates other than the parallel test are exact.

mod hull;
pub mod rand;
mod segment;
mod types;
mod util;

pub use hull::{convex_hull, Hull};
pub use segment::segment_intersection;
pub use types::{Axis, Bounds2, GeomCfg};
pub use util::{cross, distance, unit};

#[cfg(test)]
mod tests;
