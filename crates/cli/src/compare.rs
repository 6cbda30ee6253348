//! Computed diameters vs. the reference axes annotated on each nodule's key slice.

use recist::{SliceId, Vec2};
use serde::Serialize;

use crate::input::Study;
use crate::record::{find_record, DiameterRecord};

#[derive(Debug, PartialEq, Serialize)]
pub struct Comparison {
    pub slice_id: SliceId,
    pub annotated_long: Option<f64>,
    pub annotated_short: Option<f64>,
    pub computed_long: Option<f64>,
    pub computed_short: Option<f64>,
    /// `computed - annotated`, when both exist.
    pub long_diff: Option<f64>,
    pub short_diff: Option<f64>,
}

fn diff(computed: Option<f64>, annotated: Option<f64>) -> Option<f64> {
    Some(computed? - annotated?)
}

/// One entry per nodule that names a key slice and annotates at least one
/// axis, in nodule order. Records are matched by printed slice id.
pub fn compare(study: &Study, records: &[DiameterRecord]) -> Vec<Comparison> {
    let length = |[a, b]: [Vec2<f64>; 2]| (b - a).norm();
    study
        .nodules
        .iter()
        .filter_map(|n| {
            let key = n.key_slice_id.as_ref()?;
            let annotated_long = n.annotated_long().map(length);
            let annotated_short = n.annotated_short().map(length);
            if annotated_long.is_none() && annotated_short.is_none() {
                return None;
            }
            let rec = find_record(records, key);
            let computed_long = rec.map(DiameterRecord::major_length);
            let computed_short = rec.map(DiameterRecord::minor_length);
            Some(Comparison {
                slice_id: key.clone(),
                annotated_long,
                annotated_short,
                computed_long,
                computed_short,
                long_diff: diff(computed_long, annotated_long),
                short_diff: diff(computed_short, annotated_short),
            })
        })
        .collect()
}
