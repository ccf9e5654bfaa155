//! Parsers for correction table files.
//!
//! # finals2000A
//!
//! Fixed-column IERS format. Column ranges are byte offsets, end-exclusive:
//!
//! | Field | Bulletin B | Bulletin A | Units |
//! |-------|-----------|-----------|-------|
//! | MJD | 7..15 | 7..15 | day |
//! | xp | 134..144 | 18..27 | arcsec |
//! | yp | 144..154 | 37..46 | arcsec |
//! | UT1-UTC | 154..165 | 58..68 | s |
//! | dpsi | 165..175 | 97..106 | mas |
//! | deps | 175..185 | 116..125 | mas |
//!
//! The final Bulletin B values are used when all of them are present on the
//! line; otherwise the rapid-service Bulletin A columns are read. Lines with
//! no MJD or no UT1-UTC in either set (the tail of a predictions file) are
//! skipped. Missing nutation columns read as zero.
//!
//! # Simple rows
//!
//! Whitespace-separated `mjd dut1 xp yp [dpsi deps]` with xp/yp in arcsec and
//! dpsi/deps in mas. Blank lines and `#` comments are ignored.

use super::record::CorrectionRecord;
use crate::{TimeError, TimeResult};
use celestial_core::constants::{ARCSEC_TO_RAD, MILLIARCSEC_TO_RAD};

struct Columns {
    xp: (usize, usize),
    yp: (usize, usize),
    dut1: (usize, usize),
    dpsi: (usize, usize),
    deps: (usize, usize),
}

const BULLETIN_B: Columns = Columns {
    xp: (134, 144),
    yp: (144, 154),
    dut1: (154, 165),
    dpsi: (165, 175),
    deps: (175, 185),
};

const BULLETIN_A: Columns = Columns {
    xp: (18, 27),
    yp: (37, 46),
    dut1: (58, 68),
    dpsi: (97, 106),
    deps: (116, 125),
};

const MJD_COLUMNS: (usize, usize) = (7, 15);

pub fn parse_finals(content: &str) -> TimeResult<Vec<CorrectionRecord>> {
    let mut records: Vec<CorrectionRecord> = content.lines().filter_map(parse_finals_line).collect();

    if records.is_empty() {
        return Err(TimeError::table_load(
            None,
            "no valid records found in finals2000A data",
        ));
    }

    records.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));
    Ok(records)
}

pub fn parse_finals_line(line: &str) -> Option<CorrectionRecord> {
    let mjd = parse_field(line, MJD_COLUMNS)?;
    read_bulletin(line, mjd, &BULLETIN_B, true).or_else(|| read_bulletin(line, mjd, &BULLETIN_A, false))
}

fn read_bulletin(line: &str, mjd: f64, cols: &Columns, all_required: bool) -> Option<CorrectionRecord> {
    let dut1 = parse_field(line, cols.dut1)?;
    let xp = parse_field(line, cols.xp);
    let yp = parse_field(line, cols.yp);
    let dpsi = parse_field(line, cols.dpsi);
    let deps = parse_field(line, cols.deps);

    if all_required && [xp, yp, dpsi, deps].iter().any(Option::is_none) {
        return None;
    }

    Some(
        CorrectionRecord::new(
            mjd,
            dut1,
            xp.unwrap_or(0.0) * ARCSEC_TO_RAD,
            yp.unwrap_or(0.0) * ARCSEC_TO_RAD,
        )
        .with_nutation(
            dpsi.unwrap_or(0.0) * MILLIARCSEC_TO_RAD,
            deps.unwrap_or(0.0) * MILLIARCSEC_TO_RAD,
        ),
    )
}

fn parse_field(line: &str, (start, end): (usize, usize)) -> Option<f64> {
    let s = line.get(start..end.min(line.len()))?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

pub fn parse_simple(content: &str) -> TimeResult<Vec<CorrectionRecord>> {
    let mut records = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TimeError::table_parse(idx + 1, e.to_string()))?;

        let record = match values.as_slice() {
            [mjd, dut1, xp, yp] => {
                CorrectionRecord::new(*mjd, *dut1, xp * ARCSEC_TO_RAD, yp * ARCSEC_TO_RAD)
            }
            [mjd, dut1, xp, yp, dpsi, deps] => {
                CorrectionRecord::new(*mjd, *dut1, xp * ARCSEC_TO_RAD, yp * ARCSEC_TO_RAD)
                    .with_nutation(dpsi * MILLIARCSEC_TO_RAD, deps * MILLIARCSEC_TO_RAD)
            }
            other => {
                return Err(TimeError::table_parse(
                    idx + 1,
                    format!("expected 4 or 6 columns, found {}", other.len()),
                ))
            }
        };
        records.push(record);
    }

    if records.is_empty() {
        return Err(TimeError::table_load(None, "no rows found in correction table"));
    }

    records.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));
    Ok(records)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn put(line: &mut [u8], (start, end): (usize, usize), value: &str) {
        let width = end - start;
        let text = format!("{:>width$}", value, width = width);
        line[start..end].copy_from_slice(text.as_bytes());
    }

    /// A finals2000A line with Bulletin A values and, optionally, Bulletin B.
    pub(crate) fn finals_line(mjd: f64, a: [f64; 5], b: Option<[f64; 5]>) -> String {
        let mut line = vec![b' '; if b.is_some() { 185 } else { 134 }];
        put(&mut line, MJD_COLUMNS, &format!("{:.2}", mjd));
        let [xp, yp, dut1, dpsi, deps] = a;
        put(&mut line, BULLETIN_A.xp, &format!("{:.6}", xp));
        put(&mut line, BULLETIN_A.yp, &format!("{:.6}", yp));
        put(&mut line, BULLETIN_A.dut1, &format!("{:.7}", dut1));
        put(&mut line, BULLETIN_A.dpsi, &format!("{:.3}", dpsi));
        put(&mut line, BULLETIN_A.deps, &format!("{:.3}", deps));
        if let Some([xp, yp, dut1, dpsi, deps]) = b {
            put(&mut line, BULLETIN_B.xp, &format!("{:.6}", xp));
            put(&mut line, BULLETIN_B.yp, &format!("{:.6}", yp));
            put(&mut line, BULLETIN_B.dut1, &format!("{:.7}", dut1));
            put(&mut line, BULLETIN_B.dpsi, &format!("{:.3}", dpsi));
            put(&mut line, BULLETIN_B.deps, &format!("{:.3}", deps));
        }
        String::from_utf8(line).unwrap()
    }

    #[test]
    fn test_bulletin_a_only() {
        let line = finals_line(51544.0, [0.043, 0.378, 0.3554, -50.0, -2.0], None);
        let r = parse_finals_line(&line).unwrap();
        assert_eq!(r.mjd, 51544.0);
        assert!((r.dut1 - 0.3554).abs() < 1e-12);
        assert!((r.xp - 0.043 * ARCSEC_TO_RAD).abs() < 1e-15);
        assert!((r.yp - 0.378 * ARCSEC_TO_RAD).abs() < 1e-15);
        assert!((r.dpsi + 50.0 * MILLIARCSEC_TO_RAD).abs() < 1e-15);
        assert!((r.deps + 2.0 * MILLIARCSEC_TO_RAD).abs() < 1e-15);
    }

    #[test]
    fn test_bulletin_b_preferred() {
        let line = finals_line(
            51544.0,
            [0.1, 0.2, 0.3, 1.0, 2.0],
            Some([0.043278, 0.377698, 0.3554318, -53.5, -2.9]),
        );
        let r = parse_finals_line(&line).unwrap();
        assert!((r.dut1 - 0.3554318).abs() < 1e-12);
        assert!((r.xp - 0.043278 * ARCSEC_TO_RAD).abs() < 1e-15);
        assert!((r.dpsi + 53.5 * MILLIARCSEC_TO_RAD).abs() < 1e-15);
    }

    #[test]
    fn test_incomplete_bulletin_b_falls_back() {
        let mut line = finals_line(51544.0, [0.1, 0.2, 0.3, 1.0, 2.0], Some([0.5; 5])).into_bytes();
        // blank out Bulletin B yp
        line[BULLETIN_B.yp.0..BULLETIN_B.yp.1].fill(b' ');
        let r = parse_finals_line(std::str::from_utf8(&line).unwrap()).unwrap();
        assert!((r.dut1 - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_skips_lines_without_values() {
        assert!(parse_finals_line("short line").is_none());
        assert!(parse_finals_line(&" ".repeat(188)).is_none());

        // MJD present but no UT1-UTC: prediction tail
        let mut line = vec![b' '; 100];
        put(&mut line, MJD_COLUMNS, "60000.00");
        assert!(parse_finals_line(std::str::from_utf8(&line).unwrap()).is_none());
    }

    #[test]
    fn test_parse_finals_sorts_and_skips() {
        let content = format!(
            "header\n{}\n{}\n",
            finals_line(51545.0, [0.0, 0.0, 0.2, 0.0, 0.0], None),
            finals_line(51544.0, [0.0, 0.0, 0.3, 0.0, 0.0], None),
        );
        let records = parse_finals(&content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mjd, 51544.0);
        assert_eq!(records[1].mjd, 51545.0);
    }

    #[test]
    fn test_parse_finals_empty_errors() {
        assert!(matches!(
            parse_finals("bad\nlines\nonly\n"),
            Err(TimeError::CorrectionTableLoad { .. })
        ));
    }

    #[test]
    fn test_parse_simple() {
        let content = "# mjd dut1 xp yp\n51545 0.3546 0.04 0.38\n\n51544 0.3554 0.043 0.377 # first\n";
        let records = parse_simple(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mjd, 51544.0);
        assert!((records[0].xp - 0.043 * ARCSEC_TO_RAD).abs() < 1e-15);
        assert_eq!(records[0].dpsi, 0.0);
    }

    #[test]
    fn test_parse_simple_rejects_bad_rows() {
        assert!(matches!(
            parse_simple("51544 0.1 0.2\n"),
            Err(TimeError::CorrectionTableParse { line: 1, .. })
        ));
        assert!(matches!(
            parse_simple("51544 0.1 abc 0.2\n"),
            Err(TimeError::CorrectionTableParse { line: 1, .. })
        ));
        assert!(parse_simple("# only a comment\n").is_err());
    }
}
