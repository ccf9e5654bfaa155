//! Fundamental astronomy primitives.
//!
//! The coordinate and time crates never implement precession, nutation,
//! aberration or refraction themselves. They call the operations on
//! [`AstroKernel`], whose production implementation [`ErfaKernel`] forwards to
//! ERFA. Tests substitute their own implementation (for example a counting
//! mock) to observe which primitives a conversion touches.
//!
//! # Conventions
//!
//! - Every angle crossing this boundary is in **radians**.
//! - Every epoch is a two-part Julian Date `(date1, date2)`. The split keeps
//!   sub-microsecond precision; callers usually pass `(2400000.5, mjd)`.
//! - The observed-place operations report azimuth and **zenith distance**, not
//!   altitude.
//!
//! # Status codes
//!
//! Several ERFA routines return an integer status: `0` for success, `+1` for a
//! "dubious year" (the epoch lies outside the span the leap-second table can
//! vouch for) and `-1` for an unacceptable date. [`check_status`] turns that
//! convention into a [`PrimitiveStatus`] or a fatal
//! [`AstroError::PrimitiveError`].

mod erfa;

pub use erfa::ErfaKernel;

use crate::{AstroError, AstroResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-fatal outcome of a primitive call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveStatus {
    #[default]
    Ok,
    /// Epoch is far outside the validity window of the primitive's tables.
    /// The result is still produced.
    DubiousEpoch,
}

impl PrimitiveStatus {
    /// Combines the statuses of two chained calls, keeping the worse one.
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        self.max(other)
    }

    pub fn is_dubious(self) -> bool {
        self == Self::DubiousEpoch
    }
}

/// A primitive result together with its non-fatal status.
pub type Checked<T> = AstroResult<(T, PrimitiveStatus)>;

/// Maps an ERFA-style integer status onto [`PrimitiveStatus`].
///
/// Positive codes are warnings, negative codes are fatal and become a
/// [`AstroError::PrimitiveError`] naming `function`.
pub fn check_status(function: &str, code: i32) -> AstroResult<PrimitiveStatus> {
    match code {
        0 => Ok(PrimitiveStatus::Ok),
        c if c > 0 => Ok(PrimitiveStatus::DubiousEpoch),
        -1 => Err(AstroError::primitive(function, code, "unacceptable date")),
        c => Err(AstroError::primitive(
            function,
            c,
            "primitive reported an internal failure",
        )),
    }
}

/// Site and Earth-orientation inputs for the observed-place primitives.
///
/// A frozen numeric snapshot: the coordinate layer builds one per call from
/// an observer and an instant, so the primitive never sees a half-updated
/// observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteParams {
    /// UT1 - UTC in seconds.
    pub dut1: f64,
    /// East-positive geodetic longitude, radians.
    pub longitude: f64,
    /// Geodetic latitude, radians.
    pub latitude: f64,
    /// Height above the ellipsoid, meters.
    pub elevation_m: f64,
    /// Polar motion x, radians.
    pub xp: f64,
    /// Polar motion y, radians.
    pub yp: f64,
    pub pressure_hpa: f64,
    pub temperature_c: f64,
    /// Relative humidity, 0-1.
    pub relative_humidity: f64,
    pub wavelength_um: f64,
}

/// Outputs of the CIRS to observed transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservedSolution {
    /// Azimuth, north through east, radians.
    pub azimuth: f64,
    /// Zenith distance, radians.
    pub zenith: f64,
    /// Observed hour angle, radians.
    pub hour_angle: f64,
    /// Observed (refracted) CIO-based right ascension, radians.
    pub ra: f64,
    /// Observed declination, radians.
    pub dec: f64,
}

/// Named operations of the fundamental astronomy library.
///
/// All methods are pure functions of their arguments.
pub trait AstroKernel: Send + Sync {
    /// UTC to TAI (`eraUtctai`).
    fn utc_to_tai(&self, utc1: f64, utc2: f64) -> Checked<(f64, f64)>;

    /// TAI to TT (`eraTaitt`).
    fn tai_to_tt(&self, tai1: f64, tai2: f64) -> (f64, f64);

    /// UTC to UT1 given UT1-UTC in seconds (`eraUtcut1`).
    fn utc_to_ut1(&self, utc1: f64, utc2: f64, dut1: f64) -> Checked<(f64, f64)>;

    /// TT to TDB given TDB-TT in seconds (`eraTttdb`).
    fn tt_to_tdb(&self, tt1: f64, tt2: f64, dtr: f64) -> (f64, f64);

    /// TDB-TT in seconds for a geocentric observer (`eraDtdb`).
    ///
    /// `ut` is the UT1 fraction of a day.
    fn tdb_minus_tt(&self, tt1: f64, tt2: f64, ut: f64) -> f64;

    /// ICRS astrometric place to CIRS (`eraAtci13`, zero proper motion and
    /// parallax). Returns `(ri, di, eo)` where `eo` is the equation of the
    /// origins already applied to `ri`.
    fn icrs_to_cirs(&self, rc: f64, dc: f64, tdb1: f64, tdb2: f64) -> (f64, f64, f64);

    /// CIRS to ICRS astrometric place (`eraAtic13`). Returns `(rc, dc, eo)`.
    fn cirs_to_icrs(&self, ri: f64, di: f64, tdb1: f64, tdb2: f64) -> (f64, f64, f64);

    /// ICRS to Galactic (`eraIcrs2g`).
    fn icrs_to_galactic(&self, ra: f64, dec: f64) -> (f64, f64);

    /// Galactic to ICRS (`eraG2icrs`).
    fn galactic_to_icrs(&self, l: f64, b: f64) -> (f64, f64);

    /// ICRS to ecliptic of date, IAU 2006 (`eraEqec06`).
    fn icrs_to_ecliptic(&self, tt1: f64, tt2: f64, ra: f64, dec: f64) -> (f64, f64);

    /// Ecliptic of date to ICRS, IAU 2006 (`eraEceq06`).
    fn ecliptic_to_icrs(&self, tt1: f64, tt2: f64, lon: f64, lat: f64) -> (f64, f64);

    /// CIRS to observed place (`eraAtio13`).
    fn cirs_to_observed(
        &self,
        ri: f64,
        di: f64,
        utc1: f64,
        utc2: f64,
        site: &SiteParams,
    ) -> Checked<ObservedSolution>;

    /// Observed azimuth/zenith distance to CIRS (`eraAtoi13`).
    fn observed_to_cirs(
        &self,
        azimuth: f64,
        zenith: f64,
        utc1: f64,
        utc2: f64,
        site: &SiteParams,
    ) -> Checked<(f64, f64)>;

    /// Great-circle separation of two (longitude, latitude) points (`eraSeps`).
    fn separation(&self, al: f64, ap: f64, bl: f64, bp: f64) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status_mapping() {
        assert_eq!(check_status("eraAtio13", 0).unwrap(), PrimitiveStatus::Ok);
        assert_eq!(
            check_status("eraAtio13", 1).unwrap(),
            PrimitiveStatus::DubiousEpoch
        );

        let err = check_status("eraAtio13", -1).unwrap_err();
        match err {
            AstroError::PrimitiveError {
                function, status, ..
            } => {
                assert_eq!(function, "eraAtio13");
                assert_eq!(status, -1);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_status_merge_keeps_worst() {
        use PrimitiveStatus::*;
        assert_eq!(Ok.merge(Ok), Ok);
        assert_eq!(Ok.merge(DubiousEpoch), DubiousEpoch);
        assert_eq!(DubiousEpoch.merge(Ok), DubiousEpoch);
        assert!(DubiousEpoch.is_dubious());
    }
}
