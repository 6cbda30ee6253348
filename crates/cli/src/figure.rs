//! Key-slice overlays: hull outline, computed long/short diameters, and the
//! annotated reference axes, one SVG per key slice.

use anyhow::{Context, Result};
use plotters::prelude::*;
use recist::geom2::convex_hull;
use recist::{Hull, SliceId, Vec2};
use std::fs;
use std::path::{Path, PathBuf};

use crate::input::Study;
use crate::provenance::{self, Payload};
use crate::record::{find_record, read_records, DiameterRecord};

const SIZE: u32 = 800;
/// Padding around the drawn geometry, in input units.
const PAD: f64 = 10.0;

pub struct SliceFigure {
    pub slice_id: SliceId,
    pub hull: Hull,
    pub computed: Option<DiameterRecord>,
    pub annotated_long: Option<[Vec2<f64>; 2]>,
    pub annotated_short: Option<[Vec2<f64>; 2]>,
}

impl SliceFigure {
    /// Square plotting window around everything drawn.
    fn window(&self) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
        let mut pts: Vec<Vec2<f64>> = self.hull.points().to_vec();
        if let Some(r) = &self.computed {
            pts.extend(r.points);
        }
        pts.extend(self.annotated_long.into_iter().flatten());
        pts.extend(self.annotated_short.into_iter().flatten());
        let Some(b) = recist::geom2::Bounds2::of(&pts) else {
            return (-PAD..PAD, -PAD..PAD);
        };
        let c = (b.min + b.max) / 2.0;
        let half = (b.max.x - b.min.x).max(b.max.y - b.min.y) / 2.0 + PAD;
        (c.x - half..c.x + half, c.y - half..c.y + half)
    }
}

/// One figure per nodule with a key slice whose contour is present.
pub fn key_slice_figures(study: &Study, records: &[DiameterRecord]) -> Result<Vec<SliceFigure>> {
    let mut out = Vec::new();
    for n in &study.nodules {
        let Some(key) = &n.key_slice_id else {
            continue;
        };
        let Some(raw) = n.contour(key) else {
            tracing::warn!(slice_id = %key, "key slice has no contour");
            continue;
        };
        let contour = raw.to_contour()?;
        out.push(SliceFigure {
            slice_id: key.clone(),
            hull: convex_hull(&contour.points),
            computed: find_record(records, key).cloned(),
            annotated_long: n.annotated_long(),
            annotated_short: n.annotated_short(),
        });
    }
    Ok(out)
}

/// Render a figure as an SVG document.
pub fn render(fig: &SliceFigure) -> Result<String> {
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (SIZE, SIZE)).into_drawing_area();
        root.fill(&WHITE)?;
        let (xs, ys) = fig.window();
        let mut chart = ChartBuilder::on(&root)
            .caption(format!("Slice ID: {}", fig.slice_id), ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(xs, ys)?;
        chart.configure_mesh().draw()?;

        let mut outline: Vec<(f64, f64)> = fig.hull.points().iter().map(|p| (p.x, p.y)).collect();
        if let Some(&first) = outline.first() {
            outline.push(first);
        }
        chart
            .draw_series(std::iter::once(PathElement::new(
                outline,
                GREEN.stroke_width(2),
            )))?
            .label("hull")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

        let mut segments: Vec<(&str, [Vec2<f64>; 2], RGBColor)> = Vec::new();
        if let Some(r) = &fig.computed {
            segments.push(("long", [r.points[0], r.points[1]], BLUE));
            segments.push(("short", [r.points[2], r.points[3]], RED));
        }
        if let Some(a) = fig.annotated_long {
            segments.push(("annotated long", a, YELLOW));
        }
        if let Some(a) = fig.annotated_short {
            segments.push(("annotated short", a, MAGENTA));
        }
        for (label, [a, b], color) in segments {
            chart
                .draw_series(std::iter::once(PathElement::new(
                    vec![(a.x, a.y), (b.x, b.y)],
                    color.stroke_width(2),
                )))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
        root.present()?;
    }
    Ok(buf)
}

/// `slice_<id>.svg`, with characters outside `[A-Za-z0-9_-]` replaced by `_`.
fn file_name(slice_id: &SliceId) -> String {
    let id: String = slice_id
        .to_string()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("slice_{id}.svg")
}

/// Write every key-slice figure under `out_dir`; returns the written paths.
pub fn write_figures(
    study: &Study,
    records: &[DiameterRecord],
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating figure dir {}", out_dir.display()))?;
    let mut written = Vec::new();
    for fig in key_slice_figures(study, records)? {
        let path = out_dir.join(file_name(&fig.slice_id));
        let svg = render(&fig).with_context(|| format!("rendering slice {}", fig.slice_id))?;
        fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(slice_id = %fig.slice_id, path = %path.display(), "figure");
        written.push(path);
    }
    Ok(written)
}

/// `figure` subcommand: load inputs, write figures, optionally the
/// `<out-dir>.provenance.json` sidecar next to the directory.
pub fn run(
    input: &Path,
    diameters: &Path,
    out_dir: &Path,
    with_provenance: bool,
) -> Result<Vec<PathBuf>> {
    let study = Study::load(input)?;
    let records = read_records(diameters)?;
    let written = write_figures(&study, &records, out_dir)?;
    if with_provenance {
        let mut payload = Payload::new(serde_json::json!({ "size": SIZE, "pad": PAD }));
        payload.inputs = vec![
            input.to_string_lossy().into_owned(),
            diameters.to_string_lossy().into_owned(),
        ];
        payload.counts = serde_json::json!({ "figures": written.len() });
        payload.extra_outputs = written
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let path = provenance::write_sidecar(out_dir, payload)?;
        tracing::info!(path = %path.display(), "provenance");
    }
    Ok(written)
}
