//! Per-contour pipeline: hull → major axis → minor axis.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::axes::{major_axis, minor_axis};
use crate::error::AxisError;
use crate::geom2::{convex_hull, Axis, GeomCfg};

/// Slice identifier as found in the source record: usually an integer index,
/// occasionally a label.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliceId {
    Index(i64),
    Label(String),
}

impl fmt::Display for SliceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceId::Index(i) => write!(f, "{i}"),
            SliceId::Label(s) => f.write_str(s),
        }
    }
}

/// One slice outline. Point order is not assumed to be hull order.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    pub slice_id: SliceId,
    pub points: Vec<Vector2<f64>>,
}

impl Contour {
    pub fn new(slice_id: SliceId, points: Vec<Vector2<f64>>) -> Self {
        Self { slice_id, points }
    }

    /// Measure this contour; the result carries the slice id.
    pub fn measure(&self, cfg: &GeomCfg) -> Result<DiameterResult, AxisError> {
        let (major, minor) = measure_points(&self.points, cfg)?;
        Ok(DiameterResult {
            slice_id: self.slice_id.clone(),
            major,
            minor,
        })
    }
}

/// Long and short diameter of one contour.
///
/// `major.start/end` are p1/p2; `minor.start` is the ray's hull vertex (p3) and
/// `minor.end` the intersection on the opposite edge (p4).
#[derive(Clone, Debug, PartialEq)]
pub struct DiameterResult {
    pub slice_id: SliceId,
    pub major: Axis,
    pub minor: Axis,
}

impl DiameterResult {
    /// `[p1, p2, p3, p4]`.
    pub fn endpoints(&self) -> [Vector2<f64>; 4] {
        [
            self.major.start,
            self.major.end,
            self.minor.start,
            self.minor.end,
        ]
    }
}

/// Major and minor axis of a raw point list.
pub fn measure_points(points: &[Vector2<f64>], cfg: &GeomCfg) -> Result<(Axis, Axis), AxisError> {
    let hull = convex_hull(points);
    let major = major_axis(&hull)?;
    let minor = minor_axis(&hull, &major, cfg)?;
    Ok((major, minor))
}
