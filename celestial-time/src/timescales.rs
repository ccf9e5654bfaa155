//! UTC-based time-scale shifts for an [`Instant`].
//!
//! All shifts start from the instant's UTC split `(2400000.5, mjd)` and go
//! through the kernel:
//!
//! ```text
//! UTC ──utc_to_ut1(dut1)──▶ UT1
//! UTC ──utc_to_tai──▶ TAI ──tai_to_tt──▶ TT ──tt_to_tdb(dtr)──▶ TDB
//! ```
//!
//! `dtr = TDB - TT` comes from the kernel's series for a geocentric observer,
//! evaluated with the UT1 day fraction. Each result carries the worst
//! [`PrimitiveStatus`] of the calls that produced it.

use crate::{Instant, JulianDate, TimeResult};
use celestial_core::{AstroKernel, PrimitiveStatus};

/// A shifted date and the status of the primitives that produced it.
pub type Shifted = (JulianDate, PrimitiveStatus);

pub fn utc_to_ut1<K: AstroKernel + ?Sized>(
    kernel: &K,
    instant: &Instant,
    dut1: f64,
) -> TimeResult<Shifted> {
    let (utc1, utc2) = instant.utc_split();
    let ((ut11, ut12), status) = kernel.utc_to_ut1(utc1, utc2, dut1)?;
    Ok((JulianDate::new(ut11, ut12), status))
}

pub fn utc_to_tt<K: AstroKernel + ?Sized>(kernel: &K, instant: &Instant) -> TimeResult<Shifted> {
    let (utc1, utc2) = instant.utc_split();
    let ((tai1, tai2), status) = kernel.utc_to_tai(utc1, utc2)?;
    let (tt1, tt2) = kernel.tai_to_tt(tai1, tai2);
    Ok((JulianDate::new(tt1, tt2), status))
}

pub fn utc_to_tdb<K: AstroKernel + ?Sized>(
    kernel: &K,
    instant: &Instant,
    dut1: f64,
) -> TimeResult<Shifted> {
    let (tt, tt_status) = utc_to_tt(kernel, instant)?;
    let (ut1, ut1_status) = utc_to_ut1(kernel, instant, dut1)?;

    let ut_fraction = day_fraction(&ut1);
    let dtr = kernel.tdb_minus_tt(tt.jd1, tt.jd2, ut_fraction);
    let (tdb1, tdb2) = kernel.tt_to_tdb(tt.jd1, tt.jd2, dtr);

    Ok((JulianDate::new(tdb1, tdb2), tt_status.merge(ut1_status)))
}

/// Fraction of the civil day (from 0h) of a two-part date.
fn day_fraction(jd: &JulianDate) -> f64 {
    ((jd.jd1 - 0.5).rem_euclid(1.0) + jd.jd2.rem_euclid(1.0)).rem_euclid(1.0)
}
