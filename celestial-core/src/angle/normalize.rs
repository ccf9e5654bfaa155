//! Range conventions for frame components.
//!
//! | Component | Range | Function |
//! |-----------|-------|----------|
//! | RA, galactic l, ecliptic λ, azimuth | [0, 2π) | [`wrap_0_2pi`] |
//! | Hour angle | [-π, +π) | [`wrap_pm_pi`] |
//! | Dec, b, β | [-π/2, +π/2] | [`clamp_dec`], [`fold_latitude`] |
//! | Zenith distance | [0, π] | [`clamp_zenith`], [`fold_zenith`] |
//!
//! Wrapping keeps the direction on the sphere, and so does folding: a
//! latitude past a pole comes back on the far side with the longitude moved
//! by π. Clamping a lone component only absorbs round-off at the poles.
//! `%` is a remainder, so both wraps go through [`crate::math::fmod`] and
//! then shift negative results.
//!
//! ```
//! use celestial_core::angle::{wrap_0_2pi, wrap_pm_pi, NormalizeMode};
//! use std::f64::consts::PI;
//!
//! assert!((wrap_0_2pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-12);
//! assert!((wrap_pm_pi(1.5 * PI) + PI / 2.0).abs() < 1e-12);
//! assert_eq!(NormalizeMode::Latitude.apply(2.0), PI / 2.0);
//!
//! // dec 100° is dec 80° on the opposite meridian
//! let (ra, dec) = NormalizeMode::Latitude.apply_pair(10f64.to_radians(), 100f64.to_radians());
//! assert!((ra.to_degrees() - 190.0).abs() < 1e-9);
//! assert!((dec.to_degrees() - 80.0).abs() < 1e-9);
//! ```

use crate::constants::{HALF_PI, PI, TWOPI};
use crate::math::fmod;

/// Which convention applies to a component.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NormalizeMode {
    /// [0, 2π)
    Longitude,
    /// [-π, +π)
    Signed,
    /// [-π/2, +π/2], clamped
    Latitude,
    /// [0, π], clamped
    Zenith,
    /// Value passes through unchanged.
    None,
}

impl NormalizeMode {
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Longitude => wrap_0_2pi(x),
            Self::Signed => wrap_pm_pi(x),
            Self::Latitude => clamp_dec(x),
            Self::Zenith => clamp_zenith(x),
            Self::None => x,
        }
    }

    /// Normalizes a `(longitude, y)` pair, with `self` as the convention for
    /// `y`. The longitude always ends in [0, 2π). `Latitude` and `Zenith`
    /// fold over the pole instead of clamping.
    pub fn apply_pair(self, lon: f64, y: f64) -> (f64, f64) {
        match self {
            Self::Latitude => fold_latitude(lon, y),
            Self::Zenith => fold_zenith(lon, y),
            other => (wrap_0_2pi(lon), other.apply(y)),
        }
    }
}

/// Wraps to [-π, +π).
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w >= PI {
        w - TWOPI
    } else if w < -PI {
        w + TWOPI
    } else {
        w
    }
}

/// Wraps to [0, 2π).
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    let w = if w < 0.0 { w + TWOPI } else { w };
    // -tiny + 2π rounds to exactly 2π
    if w >= TWOPI {
        0.0
    } else {
        w
    }
}

/// Brings `(lon, lat)` to lon in [0, 2π), lat in [-π/2, +π/2] without
/// moving the point.
pub fn fold_latitude(lon: f64, lat: f64) -> (f64, f64) {
    let w = wrap_pm_pi(lat);
    let (lon, lat) = if w > HALF_PI {
        (lon + PI, PI - w)
    } else if w < -HALF_PI {
        (lon + PI, -PI - w)
    } else {
        (lon, w)
    };
    (wrap_0_2pi(lon), clamp_dec(lat))
}

/// Brings `(azimuth, zenith)` to azimuth in [0, 2π), zenith in [0, π]
/// without moving the point.
pub fn fold_zenith(az: f64, z: f64) -> (f64, f64) {
    let w = wrap_0_2pi(z);
    let (az, z) = if w > PI { (az + PI, TWOPI - w) } else { (az, w) };
    (wrap_0_2pi(az), clamp_zenith(z))
}

#[inline]
pub fn clamp_dec(x: f64) -> f64 {
    x.clamp(-HALF_PI, HALF_PI)
}

#[inline]
pub fn clamp_zenith(x: f64) -> f64 {
    x.clamp(0.0, PI)
}
