#![allow(dead_code)]

use celestial_coords::Observer;
use celestial_core::kernel::{check_status, AstroKernel, Checked, ObservedSolution, SiteParams};
use celestial_core::ErfaKernel;
use celestial_time::corrections::{CorrectionRecord, CorrectionTable};
use celestial_time::Instant;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ARCSEC_DEG: f64 = 1.0 / 3600.0;

/// JD 2451545.0 (MJD 51544.5).
pub fn j2000() -> Instant {
    Instant::from_jd(2451545.0).unwrap()
}

/// IERS values around 2000-01-01, interpolated.
pub fn j2000_table() -> CorrectionTable {
    CorrectionTable::from_records(vec![
        CorrectionRecord::new(
            51544.0,
            0.3554318,
            0.043278 * celestial_core::constants::ARCSEC_TO_RAD,
            0.377698 * celestial_core::constants::ARCSEC_TO_RAD,
        ),
        CorrectionRecord::new(
            51545.0,
            0.3546324,
            0.043245 * celestial_core::constants::ARCSEC_TO_RAD,
            0.379033 * celestial_core::constants::ARCSEC_TO_RAD,
        ),
    ])
    .with_interpolation(true)
}

/// Null Island, no atmosphere: refraction off.
pub fn null_island() -> Observer {
    Observer::builder()
        .pressure_hpa(0.0)
        .temperature_c(0.0)
        .relative_humidity(0.0)
        .wavelength_um(0.0)
        .build()
        .unwrap()
}

pub fn assert_deg_close(actual: f64, expected: f64, tol_deg: f64, what: &str) {
    let mut diff = (actual - expected).abs();
    if diff > 180.0 {
        diff = 360.0 - diff;
    }
    assert!(
        diff <= tol_deg,
        "{what}: got {actual}, expected {expected} (diff {diff}°)"
    );
}

/// Forwards to [`ErfaKernel`] and counts every call.
#[derive(Default)]
pub struct CountingKernel {
    calls: AtomicUsize,
}

impl CountingKernel {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl AstroKernel for CountingKernel {
    fn utc_to_tai(&self, utc1: f64, utc2: f64) -> Checked<(f64, f64)> {
        self.hit();
        ErfaKernel.utc_to_tai(utc1, utc2)
    }

    fn tai_to_tt(&self, tai1: f64, tai2: f64) -> (f64, f64) {
        self.hit();
        ErfaKernel.tai_to_tt(tai1, tai2)
    }

    fn utc_to_ut1(&self, utc1: f64, utc2: f64, dut1: f64) -> Checked<(f64, f64)> {
        self.hit();
        ErfaKernel.utc_to_ut1(utc1, utc2, dut1)
    }

    fn tt_to_tdb(&self, tt1: f64, tt2: f64, dtr: f64) -> (f64, f64) {
        self.hit();
        ErfaKernel.tt_to_tdb(tt1, tt2, dtr)
    }

    fn tdb_minus_tt(&self, tt1: f64, tt2: f64, ut: f64) -> f64 {
        self.hit();
        ErfaKernel.tdb_minus_tt(tt1, tt2, ut)
    }

    fn icrs_to_cirs(&self, rc: f64, dc: f64, tdb1: f64, tdb2: f64) -> (f64, f64, f64) {
        self.hit();
        ErfaKernel.icrs_to_cirs(rc, dc, tdb1, tdb2)
    }

    fn cirs_to_icrs(&self, ri: f64, di: f64, tdb1: f64, tdb2: f64) -> (f64, f64, f64) {
        self.hit();
        ErfaKernel.cirs_to_icrs(ri, di, tdb1, tdb2)
    }

    fn icrs_to_galactic(&self, ra: f64, dec: f64) -> (f64, f64) {
        self.hit();
        ErfaKernel.icrs_to_galactic(ra, dec)
    }

    fn galactic_to_icrs(&self, l: f64, b: f64) -> (f64, f64) {
        self.hit();
        ErfaKernel.galactic_to_icrs(l, b)
    }

    fn icrs_to_ecliptic(&self, tt1: f64, tt2: f64, ra: f64, dec: f64) -> (f64, f64) {
        self.hit();
        ErfaKernel.icrs_to_ecliptic(tt1, tt2, ra, dec)
    }

    fn ecliptic_to_icrs(&self, tt1: f64, tt2: f64, lon: f64, lat: f64) -> (f64, f64) {
        self.hit();
        ErfaKernel.ecliptic_to_icrs(tt1, tt2, lon, lat)
    }

    fn cirs_to_observed(
        &self,
        ri: f64,
        di: f64,
        utc1: f64,
        utc2: f64,
        site: &SiteParams,
    ) -> Checked<ObservedSolution> {
        self.hit();
        ErfaKernel.cirs_to_observed(ri, di, utc1, utc2, site)
    }

    fn observed_to_cirs(
        &self,
        azimuth: f64,
        zenith: f64,
        utc1: f64,
        utc2: f64,
        site: &SiteParams,
    ) -> Checked<(f64, f64)> {
        self.hit();
        ErfaKernel.observed_to_cirs(azimuth, zenith, utc1, utc2, site)
    }

    fn separation(&self, al: f64, ap: f64, bl: f64, bp: f64) -> f64 {
        self.hit();
        ErfaKernel.separation(al, ap, bl, bp)
    }
}

/// [`ErfaKernel`], except that both observed-place primitives report an
/// unacceptable date.
pub struct RejectingKernel;

impl AstroKernel for RejectingKernel {
    fn utc_to_tai(&self, utc1: f64, utc2: f64) -> Checked<(f64, f64)> {
        ErfaKernel.utc_to_tai(utc1, utc2)
    }

    fn tai_to_tt(&self, tai1: f64, tai2: f64) -> (f64, f64) {
        ErfaKernel.tai_to_tt(tai1, tai2)
    }

    fn utc_to_ut1(&self, utc1: f64, utc2: f64, dut1: f64) -> Checked<(f64, f64)> {
        ErfaKernel.utc_to_ut1(utc1, utc2, dut1)
    }

    fn tt_to_tdb(&self, tt1: f64, tt2: f64, dtr: f64) -> (f64, f64) {
        ErfaKernel.tt_to_tdb(tt1, tt2, dtr)
    }

    fn tdb_minus_tt(&self, tt1: f64, tt2: f64, ut: f64) -> f64 {
        ErfaKernel.tdb_minus_tt(tt1, tt2, ut)
    }

    fn icrs_to_cirs(&self, rc: f64, dc: f64, tdb1: f64, tdb2: f64) -> (f64, f64, f64) {
        ErfaKernel.icrs_to_cirs(rc, dc, tdb1, tdb2)
    }

    fn cirs_to_icrs(&self, ri: f64, di: f64, tdb1: f64, tdb2: f64) -> (f64, f64, f64) {
        ErfaKernel.cirs_to_icrs(ri, di, tdb1, tdb2)
    }

    fn icrs_to_galactic(&self, ra: f64, dec: f64) -> (f64, f64) {
        ErfaKernel.icrs_to_galactic(ra, dec)
    }

    fn galactic_to_icrs(&self, l: f64, b: f64) -> (f64, f64) {
        ErfaKernel.galactic_to_icrs(l, b)
    }

    fn icrs_to_ecliptic(&self, tt1: f64, tt2: f64, ra: f64, dec: f64) -> (f64, f64) {
        ErfaKernel.icrs_to_ecliptic(tt1, tt2, ra, dec)
    }

    fn ecliptic_to_icrs(&self, tt1: f64, tt2: f64, lon: f64, lat: f64) -> (f64, f64) {
        ErfaKernel.ecliptic_to_icrs(tt1, tt2, lon, lat)
    }

    fn cirs_to_observed(
        &self,
        ri: f64,
        di: f64,
        utc1: f64,
        utc2: f64,
        site: &SiteParams,
    ) -> Checked<ObservedSolution> {
        check_status("eraAtio13", -1)?;
        ErfaKernel.cirs_to_observed(ri, di, utc1, utc2, site)
    }

    fn observed_to_cirs(
        &self,
        azimuth: f64,
        zenith: f64,
        utc1: f64,
        utc2: f64,
        site: &SiteParams,
    ) -> Checked<(f64, f64)> {
        check_status("eraAtoi13", -1)?;
        ErfaKernel.observed_to_cirs(azimuth, zenith, utc1, utc2, site)
    }

    fn separation(&self, al: f64, ap: f64, bl: f64, bp: f64) -> f64 {
        ErfaKernel.separation(al, ap, bl, bp)
    }
}
