use thiserror::Error;

use crate::geom2::Axis;

/// Degenerate-geometry outcomes of a measurement.
///
/// Both variants are per-contour conditions, not I/O failures: callers decide
/// whether to skip the contour or abort.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AxisError {
    /// The hull has fewer than two distinct points, so no axis exists.
    #[error("hull has {found} distinct point(s), need at least 2")]
    InsufficientPoints { found: usize },
    /// No hull point on the positive side of the major axis reaches a
    /// negative-side edge along the axis normal.
    #[error("no minor axis found (major axis length {:.6})", .major.length)]
    NoMinorAxis { major: Axis },
}

/// Rejected `GeomCfg` values.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("eps_parallel must be finite and >= 0, got {0}")]
    EpsParallel(f64),
    #[error("ray_scale must be finite and >= 1, got {0}")]
    RayScale(f64),
}
