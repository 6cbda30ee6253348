//! Diameter records: `sliceId p1.x p1.y p2.x p2.y p3.x p3.y p4.x p4.y`, one per line.

use anyhow::{bail, Context, Result};
use recist::{DiameterResult, SliceId, Vec2};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// A record as read back from a diameters file.
#[derive(Clone, Debug, PartialEq)]
pub struct DiameterRecord {
    pub slice_id: SliceId,
    /// `[p1, p2, p3, p4]`: major axis endpoints, then minor axis source and target.
    pub points: [Vec2<f64>; 4],
}

impl DiameterRecord {
    pub fn major_length(&self) -> f64 {
        (self.points[1] - self.points[0]).norm()
    }
    pub fn minor_length(&self) -> f64 {
        (self.points[3] - self.points[2]).norm()
    }
}

impl From<&DiameterResult> for DiameterRecord {
    fn from(r: &DiameterResult) -> Self {
        Self {
            slice_id: r.slice_id.clone(),
            points: r.endpoints(),
        }
    }
}

/// Format one record (no trailing newline). Labels must be a single
/// non-empty token to keep the 9-field layout.
pub fn format_record(r: &DiameterResult) -> Result<String> {
    let mut line = r.slice_id.to_string();
    if line.is_empty() || line.contains(char::is_whitespace) {
        bail!("slice id {line:?} cannot be written as a single field");
    }
    for p in r.endpoints() {
        write!(line, " {} {}", p.x, p.y)?;
    }
    Ok(line)
}

/// First record whose slice id prints the same as `slice_id`; record files
/// do not keep the integer/label distinction.
pub fn find_record<'a>(
    records: &'a [DiameterRecord],
    slice_id: &SliceId,
) -> Option<&'a DiameterRecord> {
    let key = slice_id.to_string();
    records.iter().find(|r| r.slice_id.to_string() == key)
}

/// Parse one record line.
pub fn parse_record(line: &str) -> Result<DiameterRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 9 {
        bail!("expected 9 fields, found {}", fields.len());
    }
    let slice_id = match fields[0].parse::<i64>() {
        Ok(i) => SliceId::Index(i),
        Err(_) => SliceId::Label(fields[0].to_string()),
    };
    let mut coords = [0.0f64; 8];
    for (c, f) in coords.iter_mut().zip(&fields[1..]) {
        *c = f
            .parse()
            .with_context(|| format!("slice {slice_id}: bad coordinate {f:?}"))?;
    }
    let points = [0, 2, 4, 6].map(|k| Vec2::new(coords[k], coords[k + 1]));
    Ok(DiameterRecord { slice_id, points })
}

/// Read a diameters file; blank lines are skipped.
pub fn read_records(path: &Path) -> Result<Vec<DiameterRecord>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("opening diameters {}", path.display()))?;
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| parse_record(l).with_context(|| format!("{}:{}", path.display(), i + 1)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use recist::{Contour, GeomCfg};

    fn square_result() -> DiameterResult {
        Contour::new(
            SliceId::Index(41),
            vec![
                Vec2::new(0.0, 0.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(4.0, 4.0),
                Vec2::new(0.0, 4.0),
            ],
        )
        .measure(&GeomCfg::default())
        .unwrap()
    }

    #[test]
    fn record_line_layout() {
        let line = format_record(&square_result()).unwrap();
        let fields: Vec<&str> = line.split(' ').collect();
        assert_eq!(fields.len(), 9);
        assert_eq!(&fields[..7], &["41", "0", "0", "4", "4", "0", "4"]);
    }

    #[test]
    fn parse_reads_back_formatted_record() {
        let r = square_result();
        let back = parse_record(&format_record(&r).unwrap()).unwrap();
        assert_eq!(back, DiameterRecord::from(&r));
        assert!((back.major_length() - r.major.length).abs() < 1e-12);
        assert!((back.minor_length() - r.minor.length).abs() < 1e-12);
    }

    #[test]
    fn labels_that_would_split_the_line_are_rejected() {
        let mut r = square_result();
        r.slice_id = SliceId::Label("slice 4".into());
        assert!(format_record(&r).is_err());
        r.slice_id = SliceId::Label(String::new());
        assert!(format_record(&r).is_err());
        r.slice_id = SliceId::Label("s4".into());
        assert!(format_record(&r).unwrap().starts_with("s4 "));
    }

    #[test]
    fn numeric_label_is_found_by_printed_id() {
        let mut r = square_result();
        r.slice_id = SliceId::Label("12".into());
        let back = parse_record(&format_record(&r).unwrap()).unwrap();
        assert_eq!(back.slice_id, SliceId::Index(12));
        let records = [back];
        assert!(find_record(&records, &SliceId::Label("12".into())).is_some());
        assert!(find_record(&records, &SliceId::Index(12)).is_some());
        assert!(find_record(&records, &SliceId::Index(1)).is_none());
    }

    #[test]
    fn parse_rejects_short_and_garbled_lines() {
        assert!(parse_record("7 1 2 3").is_err());
        assert!(parse_record("7 1 2 3 4 5 6 7 x").is_err());
        let r = parse_record("k9 1 2 3 4 5 6 7 8").unwrap();
        assert_eq!(r.slice_id, SliceId::Label("k9".into()));
    }
}
