//! [`AstroKernel`] backed by the ERFA C library.

use super::{check_status, AstroKernel, Checked, ObservedSolution, SiteParams};

/// Stateless ERFA-backed primitives.
///
/// ```
/// use celestial_core::kernel::{AstroKernel, ErfaKernel};
///
/// let kernel = ErfaKernel;
/// let sep = kernel.separation(0.0, 0.0, 0.0, 0.5);
/// assert!((sep - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErfaKernel;

impl AstroKernel for ErfaKernel {
    fn utc_to_tai(&self, utc1: f64, utc2: f64) -> Checked<(f64, f64)> {
        let (mut tai1, mut tai2) = (0.0, 0.0);
        let code = unsafe { erfa_sys::eraUtctai(utc1, utc2, &mut tai1, &mut tai2) };
        let status = check_status("eraUtctai", code)?;
        Ok(((tai1, tai2), status))
    }

    fn tai_to_tt(&self, tai1: f64, tai2: f64) -> (f64, f64) {
        let (mut tt1, mut tt2) = (0.0, 0.0);
        // eraTaitt cannot fail
        unsafe { erfa_sys::eraTaitt(tai1, tai2, &mut tt1, &mut tt2) };
        (tt1, tt2)
    }

    fn utc_to_ut1(&self, utc1: f64, utc2: f64, dut1: f64) -> Checked<(f64, f64)> {
        let (mut ut11, mut ut12) = (0.0, 0.0);
        let code = unsafe { erfa_sys::eraUtcut1(utc1, utc2, dut1, &mut ut11, &mut ut12) };
        let status = check_status("eraUtcut1", code)?;
        Ok(((ut11, ut12), status))
    }

    fn tt_to_tdb(&self, tt1: f64, tt2: f64, dtr: f64) -> (f64, f64) {
        let (mut tdb1, mut tdb2) = (0.0, 0.0);
        unsafe { erfa_sys::eraTttdb(tt1, tt2, dtr, &mut tdb1, &mut tdb2) };
        (tdb1, tdb2)
    }

    fn tdb_minus_tt(&self, tt1: f64, tt2: f64, ut: f64) -> f64 {
        // Geocentric observer: u = v = 0 drops the topocentric terms.
        unsafe { erfa_sys::eraDtdb(tt1, tt2, ut, 0.0, 0.0, 0.0) }
    }

    fn icrs_to_cirs(&self, rc: f64, dc: f64, tdb1: f64, tdb2: f64) -> (f64, f64, f64) {
        let (mut ri, mut di, mut eo) = (0.0, 0.0, 0.0);
        unsafe {
            erfa_sys::eraAtci13(
                rc, dc, 0.0, 0.0, 0.0, 0.0, tdb1, tdb2, &mut ri, &mut di, &mut eo,
            )
        };
        (ri, di, eo)
    }

    fn cirs_to_icrs(&self, ri: f64, di: f64, tdb1: f64, tdb2: f64) -> (f64, f64, f64) {
        let (mut rc, mut dc, mut eo) = (0.0, 0.0, 0.0);
        unsafe { erfa_sys::eraAtic13(ri, di, tdb1, tdb2, &mut rc, &mut dc, &mut eo) };
        (rc, dc, eo)
    }

    fn icrs_to_galactic(&self, ra: f64, dec: f64) -> (f64, f64) {
        let (mut l, mut b) = (0.0, 0.0);
        unsafe { erfa_sys::eraIcrs2g(ra, dec, &mut l, &mut b) };
        (l, b)
    }

    fn galactic_to_icrs(&self, l: f64, b: f64) -> (f64, f64) {
        let (mut ra, mut dec) = (0.0, 0.0);
        unsafe { erfa_sys::eraG2icrs(l, b, &mut ra, &mut dec) };
        (ra, dec)
    }

    fn icrs_to_ecliptic(&self, tt1: f64, tt2: f64, ra: f64, dec: f64) -> (f64, f64) {
        let (mut lon, mut lat) = (0.0, 0.0);
        unsafe { erfa_sys::eraEqec06(tt1, tt2, ra, dec, &mut lon, &mut lat) };
        (lon, lat)
    }

    fn ecliptic_to_icrs(&self, tt1: f64, tt2: f64, lon: f64, lat: f64) -> (f64, f64) {
        let (mut ra, mut dec) = (0.0, 0.0);
        unsafe { erfa_sys::eraEceq06(tt1, tt2, lon, lat, &mut ra, &mut dec) };
        (ra, dec)
    }

    fn cirs_to_observed(
        &self,
        ri: f64,
        di: f64,
        utc1: f64,
        utc2: f64,
        site: &SiteParams,
    ) -> Checked<ObservedSolution> {
        let (mut aob, mut zob, mut hob, mut dob, mut rob) = (0.0, 0.0, 0.0, 0.0, 0.0);
        let code = unsafe {
            erfa_sys::eraAtio13(
                ri,
                di,
                utc1,
                utc2,
                site.dut1,
                site.longitude,
                site.latitude,
                site.elevation_m,
                site.xp,
                site.yp,
                site.pressure_hpa,
                site.temperature_c,
                site.relative_humidity,
                site.wavelength_um,
                &mut aob,
                &mut zob,
                &mut hob,
                &mut dob,
                &mut rob,
            )
        };
        let status = check_status("eraAtio13", code)?;
        Ok((
            ObservedSolution {
                azimuth: aob,
                zenith: zob,
                hour_angle: hob,
                ra: rob,
                dec: dob,
            },
            status,
        ))
    }

    fn observed_to_cirs(
        &self,
        azimuth: f64,
        zenith: f64,
        utc1: f64,
        utc2: f64,
        site: &SiteParams,
    ) -> Checked<(f64, f64)> {
        let (mut ri, mut di) = (0.0, 0.0);
        // "A": the observed pair is azimuth / zenith distance.
        let kind = c"A";
        let code = unsafe {
            erfa_sys::eraAtoi13(
                kind.as_ptr(),
                azimuth,
                zenith,
                utc1,
                utc2,
                site.dut1,
                site.longitude,
                site.latitude,
                site.elevation_m,
                site.xp,
                site.yp,
                site.pressure_hpa,
                site.temperature_c,
                site.relative_humidity,
                site.wavelength_um,
                &mut ri,
                &mut di,
            )
        };
        let status = check_status("eraAtoi13", code)?;
        Ok(((ri, di), status))
    }

    fn separation(&self, al: f64, ap: f64, bl: f64, bp: f64) -> f64 {
        unsafe { erfa_sys::eraSeps(al, ap, bl, bp) }
    }
}
