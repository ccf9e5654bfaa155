use super::record::{CorrectionRecord, EopSample};
use tracing::warn;

/// Values for `mjd` from a sorted, non-empty record slice.
///
/// The row used is the last one whose MJD is not after `mjd` (for daily rows,
/// the row of `floor(mjd)`). With `interpolate` set, values are linearly
/// interpolated toward the next row unless the two rows are more than
/// `max_gap_days` apart.
///
/// Epochs before the first row, or after the last row's day, are clamped to
/// that edge row and flagged `extrapolated`.
pub(crate) fn sample(
    records: &[CorrectionRecord],
    mjd: f64,
    interpolate: bool,
    max_gap_days: f64,
) -> EopSample {
    debug_assert!(!records.is_empty());
    let first = &records[0];
    let last = &records[records.len() - 1];

    if mjd < first.mjd || mjd.floor() > last.mjd {
        let edge = if mjd < first.mjd { first } else { last };
        warn!(
            mjd,
            first = first.mjd,
            last = last.mjd,
            "epoch outside correction table, using edge row MJD {}",
            edge.mjd
        );
        let mut s = EopSample::from_record(mjd, edge);
        s.extrapolated = true;
        return s;
    }

    let idx = records.partition_point(|r| r.mjd <= mjd).saturating_sub(1);
    let row = &records[idx];

    match records.get(idx + 1) {
        Some(next) if interpolate && next.mjd - row.mjd <= max_gap_days => {
            EopSample::from_record(mjd, &row.lerp(next, mjd))
        }
        _ => EopSample::from_record(mjd, row),
    }
}
