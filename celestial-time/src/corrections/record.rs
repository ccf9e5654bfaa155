#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One daily row of the Earth-orientation table.
///
/// Angles are stored in radians, ready for the kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrectionRecord {
    pub mjd: f64,
    /// UT1 - UTC, seconds.
    pub dut1: f64,
    /// Polar motion x, radians.
    pub xp: f64,
    /// Polar motion y, radians.
    pub yp: f64,
    /// Nutation correction in longitude, radians.
    pub dpsi: f64,
    /// Nutation correction in obliquity, radians.
    pub deps: f64,
}

impl CorrectionRecord {
    pub fn new(mjd: f64, dut1: f64, xp: f64, yp: f64) -> Self {
        Self {
            mjd,
            dut1,
            xp,
            yp,
            dpsi: 0.0,
            deps: 0.0,
        }
    }

    pub fn with_nutation(mut self, dpsi: f64, deps: f64) -> Self {
        self.dpsi = dpsi;
        self.deps = deps;
        self
    }

    pub(crate) fn lerp(&self, other: &Self, mjd: f64) -> Self {
        let t = (mjd - self.mjd) / (other.mjd - self.mjd);
        let mix = |a: f64, b: f64| a + t * (b - a);
        Self {
            mjd,
            dut1: mix(self.dut1, other.dut1),
            xp: mix(self.xp, other.xp),
            yp: mix(self.yp, other.yp),
            dpsi: mix(self.dpsi, other.dpsi),
            deps: mix(self.deps, other.deps),
        }
    }
}

/// Result of a table lookup.
///
/// `mjd` is the epoch asked for, not the row the values came from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EopSample {
    pub mjd: f64,
    pub dut1: f64,
    pub xp: f64,
    pub yp: f64,
    pub dpsi: f64,
    pub deps: f64,
    /// The epoch lay outside the table and the edge row was used.
    pub extrapolated: bool,
    /// No table could be loaded and the values are zero.
    pub degraded: bool,
}

impl EopSample {
    pub(crate) fn from_record(mjd: f64, record: &CorrectionRecord) -> Self {
        Self {
            mjd,
            dut1: record.dut1,
            xp: record.xp,
            yp: record.yp,
            dpsi: record.dpsi,
            deps: record.deps,
            extrapolated: false,
            degraded: false,
        }
    }

    pub(crate) fn zero(mjd: f64) -> Self {
        Self {
            mjd,
            degraded: true,
            ..Self::default()
        }
    }

    pub fn polar_motion(&self) -> (f64, f64) {
        (self.xp, self.yp)
    }

    /// True when the values are real table values for an epoch inside the table.
    pub fn is_exact(&self) -> bool {
        !self.extrapolated && !self.degraded
    }
}

/// A single correction value carrying the provenance flags of its lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Correction<T> {
    pub value: T,
    pub extrapolated: bool,
    pub degraded: bool,
}

impl<T> Correction<T> {
    pub fn from_sample(sample: &EopSample, value: T) -> Self {
        Self {
            value,
            extrapolated: sample.extrapolated,
            degraded: sample.degraded,
        }
    }
}
