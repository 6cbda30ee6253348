//! Long/short diameter extraction for 2D lesion contours.
//!
//! Each contour (one CT slice of a nodule outline) is reduced to its convex hull,
//! then measured twice:
//! - major axis: the longest distance between two hull points;
//! - minor axis: the longest normal-direction chord from a hull point on one side
//!   of the major axis to a hull edge on the other side.
//!
//! Both searches are exhaustive (O(n²) in the hull size); the hull itself is
//! Andrew's monotone chain (O(n log n)).
//!
//! Module map
//! - `geom2`: vector primitives, hull construction, segment intersection.
//! - `axes`: major/minor axis finders.
//! - `measure`: per-contour pipeline and result types.

pub mod axes;
pub mod error;
pub mod geom2;
pub mod measure;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{AxisError, ConfigError};
pub use geom2::{Axis, GeomCfg, Hull};
pub use measure::{measure_points, Contour, DiameterResult, SliceId};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::axes::{major_axis, minor_axis};
    pub use crate::geom2::rand::{draw_contour_radial, ContourCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        convex_hull, cross, distance, segment_intersection, Axis, Bounds2, GeomCfg, Hull,
    };
    pub use crate::measure::{measure_points, Contour, DiameterResult, SliceId};
    pub use crate::AxisError;
    pub use nalgebra::Vector2 as Vec2;
}
