//! Gregorian calendar conversion.
//!
//! Integer algorithms of ERFA's `eraCal2jd` / `eraJd2cal`, kept in Rust so an
//! [`Instant`](crate::Instant) can be built without a kernel.
//!
//! The packed form `YYYYMMDD.f` stores the date as a single `f64`: the integer
//! part is `year * 10000 + month * 100 + day`, the fraction is the day
//! fraction. It only represents years 0..=9999 unambiguously.

use celestial_core::constants::MJD_ZERO_POINT;
use celestial_core::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Earliest year the calendar algorithm accepts.
pub const MIN_YEAR: i32 = -4799;

const JD_MIN: f64 = -68569.5;
const JD_MAX: f64 = 1e9;
/// First packed value past 9999-99-99.
const PACKED_MAX: f64 = 100_000_000.0;

/// A Gregorian calendar date with a day fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GregorianDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    /// Fraction of the day in [0, 1).
    pub day_fraction: f64,
}

impl GregorianDate {
    /// `YYYYMMDD.fraction`.
    pub fn packed(&self) -> f64 {
        (self.year * 10_000 + self.month * 100 + self.day) as f64 + self.day_fraction
    }

    /// `[year, month, day, day_fraction]`.
    pub fn to_vec4(&self) -> [f64; 4] {
        [
            self.year as f64,
            self.month as f64,
            self.day as f64,
            self.day_fraction,
        ]
    }

    /// Splits a packed `YYYYMMDD.f` value. Month and day are not checked
    /// against the calendar.
    ///
    /// # Errors
    ///
    /// [`AstroError::InvalidDate`] when `packed` is not finite or lies outside
    /// years 0..=9999.
    pub fn from_packed(packed: f64) -> AstroResult<Self> {
        if !(0.0..PACKED_MAX).contains(&packed) {
            let year = if packed.is_finite() {
                (packed / 10_000.0).trunc().clamp(i32::MIN as f64, i32::MAX as f64) as i32
            } else {
                0
            };
            return Err(AstroError::invalid_date(
                year,
                0,
                0,
                &format!("packed date {} outside years 0..=9999", packed),
            ));
        }
        let whole = packed.floor();
        let ymd = whole as i64;
        Ok(Self {
            year: (ymd / 10_000) as i32,
            month: ((ymd / 100) % 100) as i32,
            day: (ymd % 100) as i32,
            day_fraction: packed - whole,
        })
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: i32) -> Option<i32> {
    const DAYS: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if !(1..=12).contains(&month) {
        return None;
    }
    let days = DAYS[(month - 1) as usize];
    Some(if month == 2 && is_leap_year(year) {
        29
    } else {
        days
    })
}

/// Modified Julian Date at 0h of a Gregorian date.
///
/// # Errors
///
/// [`AstroError::InvalidDate`] for a year before -4799, a month outside
/// 1..=12 or a day outside the month.
pub fn calendar_to_mjd(year: i32, month: i32, day: i32) -> AstroResult<f64> {
    if year < MIN_YEAR {
        return Err(AstroError::invalid_date(year, month, day, "year before -4799"));
    }
    let Some(max_day) = days_in_month(year, month) else {
        return Err(AstroError::invalid_date(year, month, day, "month outside 1..=12"));
    };
    if !(1..=max_day).contains(&day) {
        return Err(AstroError::invalid_date(
            year,
            month,
            day,
            &format!("day outside 1..={}", max_day),
        ));
    }

    let my = (month - 14) / 12;
    let iypmy = year + my;

    let mjd = (1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
        - (3 * ((iypmy + 4900) / 100)) / 4
        + day
        - 2432076;

    Ok(mjd as f64)
}

/// Gregorian date of a two-part Julian Date.
///
/// # Errors
///
/// [`AstroError::InvalidValue`] if `jd1 + jd2` lies outside [-68569.5, 1e9].
pub fn julian_to_calendar(jd1: f64, jd2: f64) -> AstroResult<GregorianDate> {
    let dj = jd1 + jd2;
    if !(JD_MIN..=JD_MAX).contains(&dj) {
        return Err(AstroError::invalid_value(
            "julian_to_calendar",
            format!("Julian Date {} outside [{}, {}]", dj, JD_MIN, JD_MAX),
        ));
    }

    // Separate each part into an integer day and a fraction, then fold the
    // fractions together with compensated summation so the day boundary is
    // decided on the exact sum.
    let d1 = nearest_int(jd1);
    let d2 = nearest_int(jd2);
    let mut jd = d1 as i64 + d2 as i64;

    let mut sum = 0.5;
    let mut comp = 0.0;
    for frac in [jd1 - d1, jd2 - d2] {
        let t = sum + frac;
        comp += if sum.abs() >= frac.abs() {
            (sum - t) + frac
        } else {
            (frac - t) + sum
        };
        sum = t;
        if sum >= 1.0 {
            jd += 1;
            sum -= 1.0;
        }
    }
    let mut fraction = sum + comp;
    comp = fraction - sum;

    if fraction < 0.0 {
        fraction = sum + 1.0;
        comp += (1.0 - fraction) + sum;
        sum = fraction;
        fraction = sum + comp;
        comp = fraction - sum;
        jd -= 1;
    }

    if (fraction - 1.0) >= -f64::EPSILON / 4.0 {
        let t = sum - 1.0;
        comp += (sum - t) - 1.0;
        sum = t;
        fraction = sum + comp;
        if -f64::EPSILON / 2.0 < fraction {
            jd += 1;
            fraction = fraction.max(0.0);
        }
    }

    let mut l = jd + 68569;
    let n = (4 * l) / 146097;
    l -= (146097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1461001;
    l -= (1461 * i) / 4 - 31;
    let k = (80 * l) / 2447;
    let day = (l - (2447 * k) / 80) as i32;
    let l = k / 11;
    let month = (k + 2 - 12 * l) as i32;
    let year = (100 * (n - 49) + i + l) as i32;

    Ok(GregorianDate {
        year,
        month,
        day,
        day_fraction: fraction,
    })
}

/// Gregorian date of an MJD.
pub fn mjd_to_calendar(mjd: f64) -> AstroResult<GregorianDate> {
    julian_to_calendar(MJD_ZERO_POINT, mjd)
}

fn nearest_int(a: f64) -> f64 {
    if a.abs() < 0.5 {
        0.0
    } else if a < 0.0 {
        (a - 0.5).ceil()
    } else {
        (a + 0.5).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use celestial_core::constants::J2000_JD;

    #[test]
    fn test_calendar_to_mjd_known_dates() {
        assert_eq!(calendar_to_mjd(2000, 1, 1).unwrap(), 51544.0);
        assert_eq!(calendar_to_mjd(1858, 11, 17).unwrap(), 0.0);
        assert_eq!(calendar_to_mjd(2024, 2, 29).unwrap(), 60369.0);
    }

    #[test]
    fn test_calendar_validation() {
        assert!(matches!(
            calendar_to_mjd(2000, 13, 1),
            Err(AstroError::InvalidDate { month: 13, .. })
        ));
        assert!(calendar_to_mjd(2001, 2, 29).is_err());
        assert!(calendar_to_mjd(2000, 4, 31).is_err());
        assert!(calendar_to_mjd(2000, 1, 0).is_err());
        assert!(calendar_to_mjd(-4800, 1, 1).is_err());
        assert!(calendar_to_mjd(1900, 2, 29).is_err());
        assert!(calendar_to_mjd(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_julian_to_calendar() {
        let date = julian_to_calendar(J2000_JD, 0.0).unwrap();
        assert_eq!((date.year, date.month, date.day), (2000, 1, 1));
        assert!((date.day_fraction - 0.5).abs() < 1e-12);

        let date = julian_to_calendar(MJD_ZERO_POINT, 51544.75).unwrap();
        assert_eq!((date.year, date.month, date.day), (2000, 1, 1));
        assert!((date.day_fraction - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_julian_to_calendar_fraction_paths() {
        // negative fraction correction
        let date = julian_to_calendar(J2000_JD, -0.6).unwrap();
        assert_eq!((date.year, date.month, date.day), (1999, 12, 31));
        assert!(date.day_fraction >= 0.0 && date.day_fraction < 1.0);

        // fraction sums to a whole day
        let date = julian_to_calendar(2451544.75, 0.75).unwrap();
        assert_eq!((date.year, date.month, date.day), (2000, 1, 2));
        assert!(date.day_fraction.abs() < 1e-9);
    }

    #[test]
    fn test_julian_to_calendar_range() {
        assert!(julian_to_calendar(1e10, 0.0).is_err());
        assert!(julian_to_calendar(-1e6, 0.0).is_err());
    }

    #[test]
    fn test_round_trip_through_mjd() {
        for &(y, m, d) in &[(1972, 6, 30), (2000, 2, 29), (2016, 12, 31), (2100, 3, 1)] {
            let mjd = calendar_to_mjd(y, m, d).unwrap();
            let back = mjd_to_calendar(mjd + 0.25).unwrap();
            assert_eq!((back.year, back.month, back.day), (y, m, d));
            assert!((back.day_fraction - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_packed_form() {
        let date = GregorianDate {
            year: 2000,
            month: 1,
            day: 1,
            day_fraction: 0.5,
        };
        assert_eq!(date.packed(), 20000101.5);
        let back = GregorianDate::from_packed(20000101.5).unwrap();
        assert_eq!(back, date);
        assert_eq!(date.to_vec4(), [2000.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_packed_rejects_years_outside_0_9999() {
        assert!(matches!(
            GregorianDate::from_packed(-20000101.5),
            Err(AstroError::InvalidDate { year: -2000, .. })
        ));
        assert!(GregorianDate::from_packed(100_000_101.0).is_err());
        assert!(GregorianDate::from_packed(f64::NAN).is_err());
        assert!(GregorianDate::from_packed(f64::INFINITY).is_err());

        let early = GregorianDate::from_packed(101.25).unwrap();
        assert_eq!((early.year, early.month, early.day), (0, 1, 1));
    }
}
