//! Error types shared by the celestial crates.
//!
//! [`AstroError`] covers the failures that can happen below the coordinate
//! layer: out-of-domain caller values, malformed sexagesimal input, invalid
//! calendar dates and fatal status codes from the fundamental astronomy
//! primitives. None of them go away on retry; data loading failures live in
//! the time crate.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidValue`](AstroError::InvalidValue) | Caller value outside its documented domain |
//! | [`InvalidFormat`](AstroError::InvalidFormat) | Sexagesimal text with too few/too many components |
//! | [`InvalidDelimiter`](AstroError::InvalidDelimiter) | No known separator found in sexagesimal text |
//! | [`InvalidDate`](AstroError::InvalidDate) | Calendar validation failures |
//! | [`PrimitiveError`](AstroError::PrimitiveError) | Fatal status from an ERFA routine |
//!
//! # Usage
//!
//! ```
//! use celestial_core::AstroError;
//!
//! fn check_humidity(h: f64) -> Result<f64, AstroError> {
//!     if !(0.0..=1.0).contains(&h) {
//!         return Err(AstroError::invalid_value(
//!             "check_humidity",
//!             format!("relative humidity {} outside [0, 1]", h),
//!         ));
//!     }
//!     Ok(h)
//! }
//!
//! assert!(check_humidity(1.5).is_err());
//! ```

use thiserror::Error;

/// Unified error type for the low-level astronomy layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// A caller-supplied value is outside its documented domain.
    #[error("Invalid value in {origin}: {message}")]
    InvalidValue { origin: String, message: String },

    /// Sexagesimal text could not be split into 3 or 4 numeric components.
    #[error("Invalid format '{input}': {message}")]
    InvalidFormat { input: String, message: String },

    /// Auto-detection found neither ':' nor ' ' in sexagesimal text.
    #[error("No known delimiter (':' or ' ') found in '{input}'")]
    InvalidDelimiter { input: String },

    /// Invalid calendar date (e.g., February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    /// A fundamental astronomy primitive reported a fatal status.
    #[error("Primitive {function} failed with status {status}: {message}")]
    PrimitiveError {
        function: String,
        status: i32,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates an [`InvalidValue`](Self::InvalidValue) error.
    pub fn invalid_value(origin: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            origin: origin.to_string(),
            message: message.into(),
        }
    }

    /// Creates an [`InvalidFormat`](Self::InvalidFormat) error.
    pub fn invalid_format(input: &str, message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_delimiter(input: &str) -> Self {
        Self::InvalidDelimiter {
            input: input.to_string(),
        }
    }

    /// Creates an [`InvalidDate`](Self::InvalidDate) error.
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    /// Creates a [`PrimitiveError`](Self::PrimitiveError) naming the routine that failed.
    pub fn primitive(function: &str, status: i32, message: &str) -> Self {
        Self::PrimitiveError {
            function: function.to_string(),
            status,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_names_origin() {
        let err = AstroError::invalid_value("Observer::with_pressure_hpa", "pressure -10 hPa < 0");
        let msg = err.to_string();
        assert!(msg.contains("Observer::with_pressure_hpa"));
        assert!(msg.contains("-10"));
    }

    #[test]
    fn test_invalid_date_error() {
        let err = AstroError::invalid_date(2000, 13, 1, "month out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date 2000-13-01: month out of range"
        );
    }

    #[test]
    fn test_format_and_delimiter_errors() {
        let err = AstroError::invalid_format("12:30", "expected 3 or 4 components, found 2");
        assert!(err.to_string().contains("12:30"));

        let err = AstroError::invalid_delimiter("123045");
        assert!(err.to_string().contains("123045"));
    }

    #[test]
    fn test_primitive_error_names_routine() {
        let err = AstroError::primitive("eraAtio13", -1, "unacceptable date");
        let msg = err.to_string();
        assert!(msg.contains("eraAtio13"));
        assert!(msg.contains("status -1"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<AstroError>();
        _assert_sync::<AstroError>();
    }
}
