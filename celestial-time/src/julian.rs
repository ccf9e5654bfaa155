use celestial_core::constants::{J2000_JD, MJD_ZERO_POINT, SECONDS_PER_DAY_F64};
use std::fmt;

/// Two-part Julian Date.
///
/// The split is free: `(2400000.5, mjd)`, `(jd, 0.0)` and `(2451545.0, days)`
/// all denote valid dates. Keeping the large constant in `jd1` preserves
/// sub-microsecond resolution in `jd2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JulianDate {
    pub jd1: f64,
    pub jd2: f64,
}

impl JulianDate {
    pub fn new(jd1: f64, jd2: f64) -> Self {
        Self { jd1, jd2 }
    }

    pub fn from_f64(jd: f64) -> Self {
        Self::new(jd, 0.0)
    }

    /// Split with the MJD zero point in `jd1`.
    pub fn from_mjd(mjd: f64) -> Self {
        Self::new(MJD_ZERO_POINT, mjd)
    }

    pub fn j2000() -> Self {
        Self::new(J2000_JD, 0.0)
    }

    pub fn jd1(&self) -> f64 {
        self.jd1
    }

    pub fn jd2(&self) -> f64 {
        self.jd2
    }

    pub fn to_f64(&self) -> f64 {
        self.jd1 + self.jd2
    }

    /// Modified Julian Date, computed from the two parts without first summing
    /// them into a full JD.
    pub fn mjd(&self) -> f64 {
        (self.jd1 - MJD_ZERO_POINT) + self.jd2
    }

    /// The same date re-split as `(2400000.5, mjd)`.
    pub fn to_mjd_split(&self) -> Self {
        Self::from_mjd(self.mjd())
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self::new(self.jd1, self.jd2 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY_F64)
    }

    /// Difference `self - other` in days.
    pub fn days_since(&self, other: &JulianDate) -> f64 {
        (self.jd1 - other.jd1) + (self.jd2 - other.jd2)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.9}", self.to_f64())
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::from_f64(jd)
    }
}

impl From<(f64, f64)> for JulianDate {
    fn from((jd1, jd2): (f64, f64)) -> Self {
        Self::new(jd1, jd2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julian_date_creation() {
        let jd = JulianDate::new(J2000_JD, 0.5);
        assert_eq!(jd.jd1(), J2000_JD);
        assert_eq!(jd.jd2(), 0.5);
        assert_eq!(jd.to_f64(), 2451545.5);
    }

    #[test]
    fn test_mjd_split() {
        let jd = JulianDate::j2000();
        assert_eq!(jd.mjd(), 51544.5);

        let split = jd.to_mjd_split();
        assert_eq!(split.jd1(), MJD_ZERO_POINT);
        assert_eq!(split.jd2(), 51544.5);
        assert_eq!(JulianDate::from_mjd(51544.5).to_f64(), J2000_JD);
    }

    #[test]
    fn test_arithmetic() {
        let jd = JulianDate::new(J2000_JD, 0.0);
        assert_eq!(jd.add_days(1.0).to_f64(), 2451546.0);

        let plus_hour = jd.add_seconds(3600.0);
        assert!((plus_hour.to_f64() - 2_451_545.041_666_666_5).abs() < 1e-9);
        assert!((plus_hour.days_since(&jd) - 1.0 / 24.0).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        assert_eq!(JulianDate::j2000().to_string(), "JD 2451545.000000000");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let test_cases = [
            JulianDate::new(J2000_JD, 0.0),
            JulianDate::new(MJD_ZERO_POINT, 51544.123456789),
            JulianDate::new(J2000_JD, 0.999999999),
        ];

        for original in test_cases {
            let json = serde_json::to_string(&original).unwrap();
            let back: JulianDate = serde_json::from_str(&json).unwrap();
            assert_eq!(original, back, "JulianDate changed in serde round-trip");
        }
    }
}
