//! Sexagesimal decomposition and formatting.
//!
//! Decomposition rounds to 1e-9 of the smallest unit before splitting, the
//! same resolution ERFA's `eraA2tf`/`eraA2af` use with `ndp = 9`. The result is
//! `[±unit, sub, subsub, fraction]`:
//!
//! - the sign lives on the first element only (a negative angle under one
//!   unit gives `-0.0`);
//! - `sub` and `subsub` are whole, non-negative numbers;
//! - `fraction` is the sub-unit remainder of `subsub`, in [0, 1).
//!
//! The string forms print 8 decimals and round at that resolution instead, so
//! `59.999999996″` is written as the next whole minute.
//!
//! ```
//! use celestial_core::Angle;
//!
//! let ra = Angle::from_degrees(83.633);
//! assert_eq!(ra.hms_parts(), [5.0, 34.0, 31.0, 0.92]);
//! assert_eq!(ra.to_hms(':'), "05:34:31.92000000");
//!
//! let dec = Angle::from_degrees(-0.5);
//! assert_eq!(dec.to_dms(' '), "-00 30 00.00000000");
//! ```
//!
//! The `Display` impl prints decimal degrees with 6 decimals. [`DmsFmt`] and
//! [`HmsFmt`] produce the symbol notation (`+38° 47' 1"`, `18ʰ 36ᵐ 56ˢ`).

use super::core::{Angle, Sexagesimal};
use core::fmt;

/// Ticks per smallest unit in the parts form.
const RESOLUTION: f64 = 1e9;
/// Ticks per smallest unit in the string forms (8 printed decimals).
const DISPLAY_RESOLUTION: f64 = 1e8;

/// Splits into `[±unit, sub, subsub, ticks]` after rounding to
/// `1 / resolution` of the smallest unit, so carries reach the lead unit.
fn split_ticks(units: f64, resolution: f64) -> [f64; 4] {
    let negative = units < 0.0;
    let per_subsub = resolution;
    let per_sub = 60.0 * per_subsub;
    let per_unit = 60.0 * per_sub;

    let mut ticks = (units.abs() * per_unit).round();
    let unit = libm::trunc(ticks / per_unit);
    ticks -= unit * per_unit;
    let sub = libm::trunc(ticks / per_sub);
    ticks -= sub * per_sub;
    let subsub = libm::trunc(ticks / per_subsub);
    ticks -= subsub * per_subsub;

    let lead = if negative { -unit } else { unit };
    [lead, sub, subsub, ticks]
}

fn split(units: f64) -> [f64; 4] {
    let [lead, sub, subsub, ticks] = split_ticks(units, RESOLUTION);
    [lead, sub, subsub, ticks / RESOLUTION]
}

fn join(units: f64, delimiter: char) -> String {
    let [lead, sub, subsub, ticks] = split_ticks(units, DISPLAY_RESOLUTION);
    let sign = if lead.is_sign_negative() { "-" } else { "" };
    format!(
        "{sign}{:02}{d}{:02}{d}{:02}.{:08}",
        lead.abs() as u64,
        sub as u64,
        subsub as u64,
        ticks as u64,
        d = delimiter
    )
}

impl Angle {
    /// `[±hours, minutes, seconds, fraction-of-second]`.
    pub fn hms_parts(self) -> [f64; 4] {
        split(self.hours())
    }

    /// `[±degrees, arcminutes, arcseconds, fraction-of-arcsecond]`.
    pub fn dms_parts(self) -> [f64; 4] {
        split(self.degrees())
    }

    /// Decomposition in the requested notation.
    pub fn sexagesimal_parts(self, kind: Sexagesimal) -> [f64; 4] {
        match kind {
            Sexagesimal::Hms => self.hms_parts(),
            Sexagesimal::Dms => self.dms_parts(),
        }
    }

    /// `HH{d}MM{d}SS.ssssssss`, with a leading '-' for negative angles.
    pub fn to_hms(self, delimiter: char) -> String {
        join(self.hours(), delimiter)
    }

    /// `DD{d}MM{d}SS.ssssssss`, with a leading '-' for negative angles.
    pub fn to_dms(self, delimiter: char) -> String {
        join(self.degrees(), delimiter)
    }
}

/// Degrees-minutes-seconds with symbols and an explicit sign.
///
/// ```
/// use celestial_core::Angle;
/// use celestial_core::angle::DmsFmt;
///
/// let dec = Angle::from_degrees(-23.4392);
/// assert_eq!(DmsFmt { frac_digits: 0 }.fmt(dec), "-23° 26' 21\"");
/// assert_eq!(DmsFmt { frac_digits: 2 }.fmt(dec), "-23° 26' 21.12\"");
/// ```
pub struct DmsFmt {
    pub frac_digits: u8,
}

/// Hours-minutes-seconds with superscript markers, wrapped to [0, 24h).
///
/// ```
/// use celestial_core::Angle;
/// use celestial_core::angle::HmsFmt;
///
/// let fmt = HmsFmt { frac_digits: 1 };
/// assert_eq!(fmt.fmt(Angle::from_hours(14.5)), "14ʰ 30ᵐ 0.0ˢ");
/// assert_eq!(fmt.fmt(Angle::from_hours(-1.5)), "22ʰ 30ᵐ 0.0ˢ");
/// ```
pub struct HmsFmt {
    pub frac_digits: u8,
}

impl DmsFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let sign = if a.degrees() < 0.0 { '-' } else { '+' };
        let mut d = a.degrees().abs();
        let deg = libm::trunc(d);
        d = (d - deg) * 60.0;
        let min = libm::trunc(d);
        let sec = (d - min) * 60.0;
        let prec = self.frac_digits as usize;
        format!("{sign}{deg:.0}° {min:.0}' {sec:.prec$}\"")
    }
}

impl HmsFmt {
    pub fn fmt(&self, a: Angle) -> String {
        let mut h = a.hours().rem_euclid(24.0);
        let hh = libm::trunc(h);
        h = (h - hh) * 60.0;
        let mm = libm::trunc(h);
        let ss = (h - mm) * 60.0;
        let prec = self.frac_digits as usize;
        format!("{hh:.0}ʰ {mm:.0}ᵐ {ss:.prec$}ˢ")
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}°", self.degrees())
    }
}
