use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use recist::{AxisError, Contour, DiameterResult, GeomCfg, SliceId};
use std::fs;
use std::path::Path;

use crate::record::format_record;

/// What to do with a contour whose geometry yields no axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OnDegenerate {
    /// Log a warning and write no record for it
    #[default]
    Skip,
    /// Abort the whole run
    Fail,
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub measured: Vec<DiameterResult>,
    pub skipped: Vec<(SliceId, AxisError)>,
}

/// Measure contours in order.
pub fn extract(contours: &[Contour], cfg: &GeomCfg, policy: OnDegenerate) -> Result<Extraction> {
    let mut out = Extraction::default();
    for c in contours {
        match c.measure(cfg) {
            Ok(r) => {
                tracing::info!(
                    slice_id = %r.slice_id,
                    long = r.major.length,
                    short = r.minor.length,
                    "measured"
                );
                out.measured.push(r);
            }
            Err(e) if policy == OnDegenerate::Skip => {
                tracing::warn!(slice_id = %c.slice_id, error = %e, "skipped");
                out.skipped.push((c.slice_id.clone(), e));
            }
            Err(e) => return Err(anyhow!(e).context(format!("contour {}", c.slice_id))),
        }
    }
    Ok(out)
}

/// Write all records at once, creating the parent directory if needed.
pub fn write_records(path: &Path, results: &[DiameterResult]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut text = String::new();
    for r in results {
        text.push_str(&format_record(r)?);
        text.push('\n');
    }
    fs::write(path, text).with_context(|| format!("writing output {}", path.display()))
}
