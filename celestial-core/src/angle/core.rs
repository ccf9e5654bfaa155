//! Core angle type.
//!
//! [`Angle`] stores a single `f64` in radians. Construction never normalizes:
//! an hour angle of -30° or a right ascension of 400° is kept as given.
//! Wrapping happens only where a frame convention asks for it
//! ([`Angle::normalized`], [`Angle::wrapped`]) and inside sexagesimal
//! decomposition.
//!
//! # Quick Start
//!
//! ```
//! use celestial_core::Angle;
//! use celestial_core::angle::Sexagesimal;
//!
//! let a = Angle::from_degrees(83.633);
//! assert!((a.radians() - 83.633_f64.to_radians()).abs() < 1e-15);
//!
//! let ra = Angle::from_sexagesimal("05:34:31.92", Sexagesimal::Hms, None).unwrap();
//! assert!((ra.degrees() - 83.633).abs() < 1e-9);
//!
//! let dec = Angle::from_sexagesimal("+22 00 52.2", Sexagesimal::Dms, None).unwrap();
//! assert!((dec.degrees() - 22.0145).abs() < 1e-9);
//! ```
//!
//! # Unit discipline
//!
//! Degree/radian conversion always goes through [`DEG_TO_RAD`] and
//! [`RAD_TO_DEG`]. Hours are degrees divided by 15.

use crate::constants::{DEG_TO_RAD, HALF_PI, PI, RAD_TO_DEG};
use crate::AstroResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An angular measurement stored as radians.
///
/// `Eq` and `Ord` are not implemented because f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
pub struct Angle {
    rad: f64,
}

/// Which sexagesimal notation a string or component vector uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sexagesimal {
    /// Hours, minutes, seconds. 1h = 15°.
    Hms,
    /// Degrees, arcminutes, arcseconds.
    Dms,
}

impl Sexagesimal {
    /// Degrees represented by one leading unit.
    #[inline]
    pub fn degrees_per_unit(self) -> f64 {
        match self {
            Self::Hms => 15.0,
            Self::Dms => 1.0,
        }
    }
}

impl Angle {
    pub const ZERO: Self = Self { rad: 0.0 };

    pub const PI: Self = Self { rad: PI };

    /// Pi/2 radians (90 degrees). Converts a zenith distance to an altitude.
    pub const HALF_PI: Self = Self { rad: HALF_PI };

    /// Creates an angle from radians. No normalization.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees. No normalization.
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let angle = Angle::from_degrees(-400.0);
    /// assert!((angle.degrees() + 400.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg * DEG_TO_RAD,
        }
    }

    /// Creates an angle from hours (1h = 15°).
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let ra = Angle::from_hours(12.0);
    /// assert!((ra.degrees() - 180.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self::from_degrees(h * 15.0)
    }

    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self::from_degrees(arcsec / 3600.0)
    }

    #[inline]
    pub fn from_arcminutes(arcmin: f64) -> Self {
        Self::from_degrees(arcmin / 60.0)
    }

    /// Parses a delimited sexagesimal string.
    ///
    /// With `delimiter = None`, ':' is tried first and then ' '. See
    /// [`parse_sexagesimal`](super::parse_sexagesimal) for the full contract.
    ///
    /// # Errors
    ///
    /// - [`InvalidFormat`](crate::AstroError::InvalidFormat) when fewer than 3
    ///   components are found, or a component is not a number.
    /// - [`InvalidDelimiter`](crate::AstroError::InvalidDelimiter) when no
    ///   delimiter was given and neither ':' nor ' ' occurs in the input.
    pub fn from_sexagesimal(
        input: &str,
        kind: Sexagesimal,
        delimiter: Option<char>,
    ) -> AstroResult<Self> {
        super::parse::parse_sexagesimal(input, kind, delimiter)
    }

    /// Builds an angle from `[unit, sub, subsub]` or `[unit, sub, subsub, fraction]`.
    ///
    /// The sign is taken from the first element only (so `-0.0` marks a
    /// negative angle smaller than one unit); the magnitudes of the remaining
    /// elements are used.
    ///
    /// ```
    /// use celestial_core::Angle;
    /// use celestial_core::angle::Sexagesimal;
    ///
    /// let a = Angle::from_sexagesimal_parts(&[-0.0, 30.0, 0.0], Sexagesimal::Dms).unwrap();
    /// assert!((a.degrees() + 0.5).abs() < 1e-12);
    /// ```
    pub fn from_sexagesimal_parts(parts: &[f64], kind: Sexagesimal) -> AstroResult<Self> {
        super::parse::angle_from_parts(parts, kind)
    }

    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad * RAD_TO_DEG
    }

    /// Returns the angle in hours (24h = 360°).
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    #[inline]
    pub fn arcseconds(self) -> f64 {
        self.degrees() * 3600.0
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Returns `(sin, cos)`.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.rad.is_finite()
    }

    /// Wraps to [-π, +π).
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let wrapped = Angle::from_degrees(270.0).wrapped();
    /// assert!((wrapped.degrees() + 90.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn wrapped(self) -> Self {
        Self {
            rad: super::normalize::wrap_pm_pi(self.rad),
        }
    }

    /// Wraps to [0, 2π). Used for right ascension and other longitudes.
    ///
    /// ```
    /// use celestial_core::Angle;
    ///
    /// let normalized = Angle::from_degrees(-90.0).normalized();
    /// assert!((normalized.degrees() - 270.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn normalized(self) -> Self {
        Self {
            rad: super::normalize::wrap_0_2pi(self.rad),
        }
    }
}

#[inline]
pub fn rad(x: f64) -> Angle {
    Angle::from_radians(x)
}

#[inline]
pub fn deg(x: f64) -> Angle {
    Angle::from_degrees(x)
}

#[inline]
pub fn hours(x: f64) -> Angle {
    Angle::from_hours(x)
}

#[inline]
pub fn arcmin(x: f64) -> Angle {
    Angle::from_arcminutes(x)
}

#[inline]
pub fn arcsec(x: f64) -> Angle {
    Angle::from_arcseconds(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_no_normalization_on_construction() {
        assert_eq!(Angle::from_degrees(720.0).degrees(), 720.0);
        assert!((Angle::from_radians(-7.0).radians() + 7.0).abs() < EPS);
        assert!((Angle::from_hours(-3.0).degrees() + 45.0).abs() < EPS);
    }

    #[test]
    fn test_degree_radian_constant() {
        let a = Angle::from_degrees(1.0);
        assert_eq!(a.radians(), DEG_TO_RAD);
        assert!((Angle::from_radians(PI).degrees() - 180.0).abs() < EPS);
    }

    #[test]
    fn test_unit_accessors() {
        let a = Angle::from_degrees(45.0);
        assert!((a.hours() - 3.0).abs() < EPS);
        assert!((a.arcseconds() - 162000.0).abs() < 1e-8);
        assert!((Angle::from_arcseconds(3600.0).degrees() - 1.0).abs() < EPS);
        assert!((Angle::from_arcminutes(30.0).degrees() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_trig() {
        let (s, c) = Angle::from_degrees(30.0).sin_cos();
        assert!((s - 0.5).abs() < EPS);
        assert!((c - 3.0_f64.sqrt() / 2.0).abs() < EPS);
    }

    #[test]
    fn test_wrapping() {
        assert!((Angle::from_degrees(370.0).normalized().degrees() - 10.0).abs() < 1e-10);
        assert!((Angle::from_degrees(-10.0).normalized().degrees() - 350.0).abs() < 1e-10);
        assert!((Angle::from_degrees(190.0).wrapped().degrees() + 170.0).abs() < 1e-10);
    }

    #[test]
    fn test_free_functions() {
        assert!((deg(90.0).radians() - HALF_PI).abs() < EPS);
        assert_eq!(rad(PI), Angle::PI);
        assert!((hours(6.0).degrees() - 90.0).abs() < EPS);
        assert!((arcsec(1.0).arcseconds() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_sexagesimal_unit_scale() {
        assert_eq!(Sexagesimal::Hms.degrees_per_unit(), 15.0);
        assert_eq!(Sexagesimal::Dms.degrees_per_unit(), 1.0);
    }
}
