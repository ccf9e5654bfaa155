use celestial_core::constants::ARCSEC_TO_RAD;
use celestial_time::corrections::{CorrectionTable, LoadPolicy, TableFormat};
use celestial_time::{Instant, TimeError};
use std::io::Write;

fn put(line: &mut [u8], start: usize, end: usize, value: String) {
    let text = format!("{:>width$}", value, width = end - start);
    line[start..end].copy_from_slice(text.as_bytes());
}

/// Bulletin A columns only, like the predicted tail of finals2000A.all.
fn rapid_line(mjd: f64, xp: f64, yp: f64, dut1: f64) -> String {
    let mut line = vec![b' '; 134];
    put(&mut line, 7, 15, format!("{:.2}", mjd));
    put(&mut line, 18, 27, format!("{:.6}", xp));
    put(&mut line, 37, 46, format!("{:.6}", yp));
    put(&mut line, 58, 68, format!("{:.7}", dut1));
    String::from_utf8(line).unwrap()
}

fn finals_file(rows: &[(f64, f64, f64, f64)]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for &(mjd, xp, yp, dut1) in rows {
        writeln!(file, "{}", rapid_line(mjd, xp, yp, dut1)).unwrap();
    }
    // prediction tail with no values
    writeln!(file, "{:>15}", "51550.00").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn finals_file_lookup_and_interpolation() {
    let file = finals_file(&[
        (51544.0, 0.043278, 0.377698, 0.3554318),
        (51545.0, 0.043, 0.378, 0.3546),
    ]);

    let table = CorrectionTable::builder()
        .with_path(file.path())
        .with_format(TableFormat::Finals)
        .with_interpolation(true)
        .build();

    assert_eq!(table.len(), 2);

    let exact = table.lookup(51544.0).unwrap();
    assert!((exact.dut1 - 0.3554318).abs() < 1e-12);
    assert!((exact.xp - 0.043278 * ARCSEC_TO_RAD).abs() < 1e-15);
    assert!(exact.is_exact());

    let mid = table.lookup(51544.5).unwrap();
    assert!((mid.dut1 - (0.3554318 + 0.3546) / 2.0).abs() < 1e-12);

    let floor = CorrectionTable::builder()
        .with_path(file.path())
        .with_interpolation(false)
        .build();
    assert!((floor.lookup(51544.9).unwrap().dut1 - 0.3554318).abs() < 1e-12);
}

#[test]
fn out_of_range_clamps_to_edge_rows() {
    let file = finals_file(&[(51544.0, 0.0, 0.0, 0.30), (51545.0, 0.0, 0.0, 0.20)]);
    let table = CorrectionTable::from_file(file.path()).unwrap();

    let before = table.lookup(50000.0).unwrap();
    assert!(before.extrapolated);
    assert!((before.dut1 - 0.30).abs() < 1e-12);
    assert_eq!(before.mjd, 50000.0);

    let after = table.lookup(60000.0).unwrap();
    assert!(after.extrapolated);
    assert!((after.dut1 - 0.20).abs() < 1e-12);
}

#[test]
fn gap_in_table_uses_lower_row() {
    let file = finals_file(&[(51544.0, 0.0, 0.0, 0.30), (51560.0, 0.0, 0.0, 0.10)]);
    let table = CorrectionTable::builder()
        .with_path(file.path())
        .with_interpolation(true)
        .with_max_gap(5.0)
        .build();
    let s = table.lookup(51552.0).unwrap();
    assert!((s.dut1 - 0.30).abs() < 1e-12);
    assert!(!s.extrapolated);
}

#[test]
fn unreadable_file_policies() {
    let fail = CorrectionTable::builder()
        .with_path("/nonexistent/finals2000A.all")
        .build();
    assert!(matches!(
        fail.lookup(51544.0),
        Err(TimeError::CorrectionTableLoad { path: Some(_), .. })
    ));

    let degrade = CorrectionTable::builder()
        .with_path("/nonexistent/finals2000A.all")
        .with_load_policy(LoadPolicy::DegradeToZero)
        .build();
    let s = degrade.lookup(51544.0).unwrap();
    assert!(s.degraded);
    assert_eq!((s.dut1, s.xp, s.yp), (0.0, 0.0, 0.0));
}

#[test]
fn garbage_file_is_a_load_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is not a correction table").unwrap();
    file.flush().unwrap();
    assert!(matches!(
        CorrectionTable::from_file(file.path()),
        Err(TimeError::CorrectionTableLoad { .. })
    ));
}

#[test]
fn instant_reads_corrections() {
    let file = finals_file(&[(51544.0, 0.1, 0.2, 0.3554318)]);
    let table = CorrectionTable::from_file(file.path()).unwrap();
    let t = Instant::from_gregorian(2000, 1, 1, 0.0).unwrap();

    let dut1 = t.dut1(&table).unwrap();
    assert!((dut1.value - 0.3554318).abs() < 1e-12);
    assert!(!dut1.degraded);

    let (xp, yp) = t.polar_motion(&table).unwrap().value;
    assert!((xp - 0.1 * ARCSEC_TO_RAD).abs() < 1e-15);
    assert!((yp - 0.2 * ARCSEC_TO_RAD).abs() < 1e-15);
}
