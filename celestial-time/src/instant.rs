//! A UTC instant with all of its date representations.
//!
//! [`Instant`] keeps the two-part Julian Date as the authoritative value and
//! derives the MJD and the Gregorian calendar date when it is built. Every
//! constructor and mutator recomputes all of them, so the three views never
//! disagree.
//!
//! ```
//! use celestial_time::Instant;
//!
//! let t = Instant::from_gregorian(2000, 1, 1, 0.5).unwrap();
//! assert_eq!(t.jd(), 2451545.0);
//! assert_eq!(t.mjd(), 51544.5);
//! assert_eq!(t.packed_gregorian(), 20000101.5);
//!
//! let later = t.add_days(1.25).unwrap();
//! assert_eq!(later.gregorian().day, 2);
//! assert!((later.gregorian().day_fraction - 0.75).abs() < 1e-9);
//! ```

use crate::calendar::{calendar_to_mjd, julian_to_calendar, GregorianDate};
use crate::corrections::{Correction, CorrectionTable, EopSample};
use crate::{JulianDate, TimeError, TimeResult};
use celestial_core::constants::{MJD_ZERO_POINT, SECONDS_PER_DAY_F64};
use celestial_core::AstroError;
use chrono::{DateTime, Utc};
use std::fmt;

/// JD of 1970-01-01T00:00:00 UTC.
const UNIX_EPOCH_MJD: f64 = 40587.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    jd: JulianDate,
    mjd: f64,
    gregorian: GregorianDate,
}

impl Instant {
    pub fn from_julian_date(jd: JulianDate) -> TimeResult<Self> {
        if !jd.jd1.is_finite() || !jd.jd2.is_finite() {
            return Err(TimeError::invalid_epoch(format!(
                "non-finite Julian Date ({}, {})",
                jd.jd1, jd.jd2
            )));
        }
        let gregorian = julian_to_calendar(jd.jd1, jd.jd2)?;
        Ok(Self {
            jd,
            mjd: jd.mjd(),
            gregorian,
        })
    }

    pub fn from_jd(jd: f64) -> TimeResult<Self> {
        Self::from_julian_date(JulianDate::from_f64(jd))
    }

    pub fn from_mjd(mjd: f64) -> TimeResult<Self> {
        Self::from_julian_date(JulianDate::from_mjd(mjd))
    }

    /// Builds an instant from a Gregorian date plus a day fraction in [0, 1).
    ///
    /// # Errors
    ///
    /// [`AstroError::InvalidDate`] for an impossible date, and
    /// [`AstroError::InvalidValue`] for a day fraction outside [0, 1).
    pub fn from_gregorian(year: i32, month: i32, day: i32, day_fraction: f64) -> TimeResult<Self> {
        if !(0.0..1.0).contains(&day_fraction) {
            return Err(AstroError::invalid_value(
                "Instant::from_gregorian",
                format!("day fraction {} outside [0, 1)", day_fraction),
            )
            .into());
        }
        let mjd = calendar_to_mjd(year, month, day)?;
        Self::from_mjd(mjd + day_fraction)
    }

    /// Builds an instant from a packed `YYYYMMDD.fraction` value.
    pub fn from_packed_gregorian(packed: f64) -> TimeResult<Self> {
        if !packed.is_finite() {
            return Err(TimeError::invalid_epoch(format!(
                "non-finite packed date {}",
                packed
            )));
        }
        let g = GregorianDate::from_packed(packed)?;
        Self::from_gregorian(g.year, g.month, g.day, g.day_fraction)
    }

    pub fn from_datetime(datetime: DateTime<Utc>) -> TimeResult<Self> {
        let days = datetime.timestamp().div_euclid(86_400);
        let secs = datetime.timestamp().rem_euclid(86_400) as f64
            + datetime.timestamp_subsec_nanos() as f64 / 1e9;
        Self::from_mjd(UNIX_EPOCH_MJD + days as f64 + secs / SECONDS_PER_DAY_F64)
    }

    /// The current wall-clock time.
    pub fn now() -> TimeResult<Self> {
        Self::from_datetime(Utc::now())
    }

    /// `None` outside chrono's representable range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = (self.mjd - UNIX_EPOCH_MJD) * SECONDS_PER_DAY_F64;
        let whole = secs.floor();
        let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
        if !(i64::MIN as f64..i64::MAX as f64).contains(&whole) {
            return None;
        }
        DateTime::<Utc>::from_timestamp(whole as i64, nanos)
    }

    pub fn jd(&self) -> f64 {
        self.jd.to_f64()
    }

    pub fn mjd(&self) -> f64 {
        self.mjd
    }

    pub fn julian_date(&self) -> JulianDate {
        self.jd
    }

    pub fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    pub fn packed_gregorian(&self) -> f64 {
        self.gregorian.packed()
    }

    /// UTC as `(2400000.5, mjd)`, the split the kernel expects.
    pub fn utc_split(&self) -> (f64, f64) {
        (MJD_ZERO_POINT, self.mjd)
    }

    /// A new instant `days` later (or earlier, for negative `days`).
    pub fn add_days(&self, days: f64) -> TimeResult<Self> {
        Self::from_julian_date(self.jd.add_days(days))
    }

    /// Moves this instant by `days` in place. On error it is left unchanged.
    pub fn advance(&mut self, days: f64) -> TimeResult<()> {
        *self = self.add_days(days)?;
        Ok(())
    }

    pub fn corrections(&self, table: &CorrectionTable) -> TimeResult<EopSample> {
        table.lookup(self.mjd)
    }

    /// UT1 - UTC in seconds.
    pub fn dut1(&self, table: &CorrectionTable) -> TimeResult<Correction<f64>> {
        let s = self.corrections(table)?;
        Ok(Correction::from_sample(&s, s.dut1))
    }

    /// Polar motion `(xp, yp)` in radians.
    pub fn polar_motion(&self, table: &CorrectionTable) -> TimeResult<Correction<(f64, f64)>> {
        let s = self.corrections(table)?;
        Ok(Correction::from_sample(&s, s.polar_motion()))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let g = &self.gregorian;
        write!(
            f,
            "JD {:.9} ({:04}-{:02}-{:02} + {:.9})",
            self.jd(),
            g.year,
            g.month,
            g.day,
            g.day_fraction
        )
    }
}

impl TryFrom<DateTime<Utc>> for Instant {
    type Error = TimeError;

    fn try_from(datetime: DateTime<Utc>) -> TimeResult<Self> {
        Self::from_datetime(datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corrections::CorrectionRecord;
    use celestial_core::constants::J2000_JD;

    #[test]
    fn test_representations_agree() {
        let a = Instant::from_jd(J2000_JD).unwrap();
        let b = Instant::from_mjd(51544.5).unwrap();
        let c = Instant::from_gregorian(2000, 1, 1, 0.5).unwrap();
        let d = Instant::from_packed_gregorian(20000101.5).unwrap();

        for t in [a, b, c, d] {
            assert!((t.jd() - J2000_JD).abs() < 1e-9);
            assert!((t.mjd() - 51544.5).abs() < 1e-9);
            assert_eq!((t.gregorian().year, t.gregorian().month, t.gregorian().day), (2000, 1, 1));
            assert!((t.packed_gregorian() - 20000101.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(
            Instant::from_gregorian(2001, 2, 29, 0.0),
            Err(TimeError::Core(AstroError::InvalidDate { .. }))
        ));
        assert!(matches!(
            Instant::from_gregorian(2000, 1, 1, 1.0),
            Err(TimeError::Core(AstroError::InvalidValue { .. }))
        ));
        assert!(Instant::from_packed_gregorian(20001301.0).is_err());
        assert!(matches!(
            Instant::from_packed_gregorian(-10000101.0),
            Err(TimeError::Core(AstroError::InvalidDate { .. }))
        ));
        assert!(Instant::from_jd(f64::NAN).is_err());
        assert!(Instant::from_jd(2e9).is_err());
    }

    #[test]
    fn test_add_days_and_advance() {
        let t = Instant::from_mjd(51544.5).unwrap();
        let later = t.add_days(31.0).unwrap();
        assert_eq!(later.gregorian().month, 2);
        assert_eq!(later.mjd(), 51575.5);
        // original untouched
        assert_eq!(t.mjd(), 51544.5);

        let mut m = t;
        m.advance(-1.0).unwrap();
        assert_eq!((m.gregorian().year, m.gregorian().month, m.gregorian().day), (1999, 12, 31));
        assert_eq!(m.mjd(), 51543.5);
    }

    #[test]
    fn test_utc_split() {
        let t = Instant::from_jd(J2000_JD).unwrap();
        assert_eq!(t.utc_split(), (MJD_ZERO_POINT, 51544.5));
    }

    #[test]
    fn test_datetime_round_trip() {
        let dt = DateTime::<Utc>::from_timestamp(946_728_000, 0).unwrap();
        let t = Instant::from_datetime(dt).unwrap();
        assert!((t.jd() - J2000_JD).abs() < 1e-9);
        let back = t.to_datetime().unwrap();
        assert!((back.timestamp() - dt.timestamp()).abs() <= 1);
    }

    #[test]
    fn test_now_is_recent() {
        let t = Instant::now().unwrap();
        // after 2024-01-01
        assert!(t.mjd() > 60310.0);
    }

    #[test]
    fn test_corrections_from_table() {
        let table = CorrectionTable::from_records(vec![
            CorrectionRecord::new(51544.0, 0.3554, 2e-7, 1.8e-6),
            CorrectionRecord::new(51545.0, 0.3546, 2e-7, 1.8e-6),
        ])
        .with_interpolation(true);
        let t = Instant::from_mjd(51544.5).unwrap();

        let dut1 = t.dut1(&table).unwrap();
        assert!((dut1.value - 0.355).abs() < 1e-9);
        assert!(!dut1.extrapolated);

        let pm = t.polar_motion(&table).unwrap();
        assert!((pm.value.0 - 2e-7).abs() < 1e-18);

        let far = Instant::from_mjd(70000.0).unwrap();
        assert!(far.dut1(&table).unwrap().extrapolated);
    }

    #[test]
    fn test_display() {
        let t = Instant::from_jd(J2000_JD).unwrap();
        assert_eq!(t.to_string(), "JD 2451545.000000000 (2000-01-01 + 0.500000000)");
    }
}
