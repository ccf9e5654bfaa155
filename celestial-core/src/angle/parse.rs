//! Sexagesimal and decimal angle parsing.
//!
//! Sexagesimal text is a delimited list of 3 or 4 numeric components:
//!
//! ```text
//! HH:MM:SS.s          (HMS, 1h = 15°)
//! DD MM SS.s          (DMS)
//! -DD:MM:SS:0.25      (4th component: extra seconds, usually a fraction)
//! ```
//!
//! A sign is valid only on the first component: `-12:34:56` works,
//! `12:-34:56` does not. The magnitude is accumulated from the absolute values
//! and the sign of the first component is applied once, so `-00:30:00` is
//! -0.5 units.
//!
//! # Delimiters
//!
//! The delimiter may be given explicitly (any single character). If it is
//! omitted, ':' and then ' ' are tried in that order. Input containing neither
//! fails with [`AstroError::InvalidDelimiter`]; nothing further is guessed.
//!
//! ```
//! use celestial_core::Angle;
//! use celestial_core::angle::Sexagesimal;
//!
//! let a = Angle::from_sexagesimal("12:00:00", Sexagesimal::Hms, None).unwrap();
//! let b = Angle::from_sexagesimal("12 00 00", Sexagesimal::Hms, None).unwrap();
//! let c = Angle::from_sexagesimal("12/00/00", Sexagesimal::Hms, Some('/')).unwrap();
//! assert!((a.degrees() - 180.0).abs() < 1e-12);
//! assert_eq!(a, b);
//! assert_eq!(a, c);
//! ```
//!
//! # String traits
//!
//! [`AngleUnits`] gives `"..".hms()`, `"..".dms()`, `"..".deg()` style parsing.
//! [`ParseAngle`] tries HMS and then falls back to decimal degrees.

use super::core::{Angle, Sexagesimal};
use crate::{AstroError, AstroResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiters tried, in order, when the caller does not name one.
pub const AUTO_DELIMITERS: [char; 2] = [':', ' '];

static LEADING_COMPONENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").expect("valid regex"));

static COMPONENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)$").expect("valid regex"));

/// Parses delimited sexagesimal text into an [`Angle`].
///
/// # Errors
///
/// - [`AstroError::InvalidFormat`]: fewer than 3 or more than 4 components,
///   a non-numeric component, or a sign after the first component.
/// - [`AstroError::InvalidDelimiter`]: `delimiter` is `None` and neither ':'
///   nor ' ' appears in the (trimmed) input.
pub fn parse_sexagesimal(
    input: &str,
    kind: Sexagesimal,
    delimiter: Option<char>,
) -> AstroResult<Angle> {
    if let Some(d) = delimiter {
        return parse_with_delimiter(input, kind, d);
    }

    let trimmed = input.trim();
    let mut last_err = None;
    for d in AUTO_DELIMITERS {
        if !trimmed.contains(d) {
            continue;
        }
        match parse_with_delimiter(input, kind, d) {
            Ok(angle) => return Ok(angle),
            Err(e) => last_err = Some(e),
        }
    }

    Err(last_err.unwrap_or_else(|| AstroError::invalid_delimiter(input)))
}

fn parse_with_delimiter(input: &str, kind: Sexagesimal, delimiter: char) -> AstroResult<Angle> {
    let trimmed = input.trim();
    let parts: Vec<&str> = if delimiter.is_whitespace() {
        trimmed
            .split(delimiter)
            .filter(|p| !p.is_empty())
            .collect()
    } else {
        trimmed.split(delimiter).map(str::trim).collect()
    };

    if parts.len() < 3 {
        return Err(AstroError::invalid_format(
            input,
            format!(
                "expected 3 or 4 components separated by '{}', found {}",
                delimiter,
                parts.len()
            ),
        ));
    }
    if parts.len() > 4 {
        return Err(AstroError::invalid_format(
            input,
            format!("too many components ({}), at most 4 allowed", parts.len()),
        ));
    }

    let mut values = [0.0_f64; 4];
    for (i, part) in parts.iter().enumerate() {
        let pattern = if i == 0 { &LEADING_COMPONENT } else { &COMPONENT };
        if !pattern.is_match(part) {
            return Err(AstroError::invalid_format(
                input,
                format!("component {} ('{}') is not a valid number", i + 1, part),
            ));
        }
        values[i] = part.parse::<f64>().map_err(|e| {
            AstroError::invalid_format(input, format!("component {}: {}", i + 1, e))
        })?;
    }

    angle_from_parts(&values[..parts.len()], kind)
}

/// Builds an angle from a 3- or 4-element component vector.
pub(super) fn angle_from_parts(parts: &[f64], kind: Sexagesimal) -> AstroResult<Angle> {
    if !(3..=4).contains(&parts.len()) {
        return Err(AstroError::invalid_format(
            &format!("{:?}", parts),
            format!("expected 3 or 4 components, found {}", parts.len()),
        ));
    }
    if parts.iter().any(|p| !p.is_finite()) {
        return Err(AstroError::invalid_format(
            &format!("{:?}", parts),
            "components must be finite",
        ));
    }

    let negative = parts[0].is_sign_negative();
    let seconds = parts[2].abs() + parts.get(3).map_or(0.0, |f| f.abs());
    let magnitude = parts[0].abs() + parts[1].abs() / 60.0 + seconds / 3600.0;
    let units = if negative { -magnitude } else { magnitude };

    Ok(Angle::from_degrees(units * kind.degrees_per_unit()))
}

/// Parse strings as angles with an explicit unit.
pub trait AngleUnits {
    fn deg(&self) -> AstroResult<Angle>;
    fn rad(&self) -> AstroResult<Angle>;
    /// Decimal hours (1 hour = 15 degrees).
    fn hours(&self) -> AstroResult<Angle>;
    /// Sexagesimal degrees, delimiter auto-detected.
    fn dms(&self) -> AstroResult<Angle>;
    /// Sexagesimal hours, delimiter auto-detected.
    fn hms(&self) -> AstroResult<Angle>;
}

impl AngleUnits for str {
    #[inline]
    fn deg(&self) -> AstroResult<Angle> {
        parse_decimal(self).map(Angle::from_degrees)
    }

    #[inline]
    fn rad(&self) -> AstroResult<Angle> {
        parse_decimal(self).map(Angle::from_radians)
    }

    #[inline]
    fn hours(&self) -> AstroResult<Angle> {
        parse_decimal(self).map(Angle::from_hours)
    }

    #[inline]
    fn dms(&self) -> AstroResult<Angle> {
        parse_sexagesimal(self, Sexagesimal::Dms, None)
    }

    #[inline]
    fn hms(&self) -> AstroResult<Angle> {
        parse_sexagesimal(self, Sexagesimal::Hms, None)
    }
}

/// Auto-detect: sexagesimal HMS first, then decimal degrees.
///
/// For coordinates with known semantics prefer [`AngleUnits`].
pub trait ParseAngle {
    fn to_angle(&self) -> AstroResult<Angle>;
}

impl ParseAngle for str {
    fn to_angle(&self) -> AstroResult<Angle> {
        match parse_sexagesimal(self, Sexagesimal::Hms, None) {
            Ok(angle) => Ok(angle),
            Err(AstroError::InvalidDelimiter { .. }) => parse_decimal(self).map(Angle::from_degrees),
            Err(e) => Err(e),
        }
    }
}

fn parse_decimal(s: &str) -> AstroResult<f64> {
    s.trim()
        .parse::<f64>()
        .map_err(|_| AstroError::invalid_format(s, "not a decimal number"))
}
