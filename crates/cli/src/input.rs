//! Nodule study JSON: `ct_nodule[].contour3D[].{sliceId, data[0]}`.

use anyhow::{Context, Result};
use recist::{Contour, SliceId, Vec2};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Structural problems in an otherwise well-formed JSON document.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("schema: {0}")]
    Schema(#[from] serde_json::Error),
    #[error("contour {slice_id}: no data group")]
    NoDataGroup { slice_id: SliceId },
    #[error("contour {slice_id}: first data group is not a point list: {source}")]
    BadDataGroup {
        slice_id: SliceId,
        source: serde_json::Error,
    },
    #[error("contour {slice_id}: point #{index} has {len} component(s), need 2")]
    ShortPoint {
        slice_id: SliceId,
        index: usize,
        len: usize,
    },
    #[error("contour {slice_id}: point #{index} is not finite")]
    NonFinitePoint { slice_id: SliceId, index: usize },
}

#[derive(Debug, Deserialize)]
pub struct Study {
    #[serde(rename = "ct_nodule")]
    pub nodules: Vec<Nodule>,
}

#[derive(Debug, Deserialize)]
pub struct Nodule {
    #[serde(rename = "contour3D")]
    pub contours: Vec<RawContour>,
    /// Slice carrying the reference annotation, if any.
    #[serde(rename = "keySliceId", default)]
    pub key_slice_id: Option<SliceId>,
    /// Annotated long axis `[x1, y1, x2, y2]`.
    #[serde(rename = "longAxis", default)]
    pub long_axis: Vec<f64>,
    /// Annotated short axis `[x1, y1, x2, y2]`.
    #[serde(rename = "shortAxis", default)]
    pub short_axis: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct RawContour {
    #[serde(rename = "sliceId")]
    pub slice_id: SliceId,
    /// Data groups; only the first is decoded, the rest stay raw.
    pub data: Vec<Value>,
}

impl Nodule {
    /// Contour of the given slice, compared by printed id.
    pub fn contour(&self, slice_id: &SliceId) -> Option<&RawContour> {
        let key = slice_id.to_string();
        self.contours
            .iter()
            .find(|c| c.slice_id.to_string() == key)
    }
    pub fn annotated_long(&self) -> Option<[Vec2<f64>; 2]> {
        axis_points(&self.long_axis)
    }
    pub fn annotated_short(&self) -> Option<[Vec2<f64>; 2]> {
        axis_points(&self.short_axis)
    }
}

/// `[x1, y1, x2, y2]` as two points; `None` when absent or short.
fn axis_points(axis: &[f64]) -> Option<[Vec2<f64>; 2]> {
    match axis {
        [x1, y1, x2, y2, ..] => Some([Vec2::new(*x1, *y1), Vec2::new(*x2, *y2)]),
        _ => None,
    }
}

impl RawContour {
    pub fn to_contour(&self) -> Result<Contour, InputError> {
        let first = self.data.first().ok_or_else(|| InputError::NoDataGroup {
            slice_id: self.slice_id.clone(),
        })?;
        let group = Vec::<Vec<f64>>::deserialize(first).map_err(|source| {
            InputError::BadDataGroup {
                slice_id: self.slice_id.clone(),
                source,
            }
        })?;
        let mut points = Vec::with_capacity(group.len());
        for (index, p) in group.iter().enumerate() {
            let [x, y] = match p.as_slice() {
                [x, y, ..] => [*x, *y],
                _ => {
                    return Err(InputError::ShortPoint {
                        slice_id: self.slice_id.clone(),
                        index,
                        len: p.len(),
                    })
                }
            };
            if !(x.is_finite() && y.is_finite()) {
                return Err(InputError::NonFinitePoint {
                    slice_id: self.slice_id.clone(),
                    index,
                });
            }
            points.push(Vec2::new(x, y));
        }
        Ok(Contour {
            slice_id: self.slice_id.clone(),
            points,
        })
    }
}

impl Study {
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("opening input {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// All contours in document order (nodule by nodule).
    pub fn contours(&self) -> Result<Vec<Contour>, InputError> {
        self.nodules
            .iter()
            .flat_map(|n| n.contours.iter())
            .map(RawContour::to_contour)
            .collect()
    }
}
