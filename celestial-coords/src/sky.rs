use crate::transforms::{self, Context, ObservedByproducts};
use crate::{CoordError, CoordResult, Frame, Observer};
use celestial_core::constants::EQUALITY_TOLERANCE_RAD;
use celestial_core::{Angle, AstroKernel, ErfaKernel, PrimitiveStatus};
use celestial_time::{corrections, Instant};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position on the sky in one of the supported [`Frame`]s.
///
/// `x` is the longitude-like coordinate and `y` the latitude-like one; in the
/// observed frame they are azimuth and **zenith** angle. Values are kept as
/// given on construction; conversions produce x in [0°, 360°).
///
/// ```
/// use celestial_coords::{Frame, SkyCoord};
/// use celestial_time::Instant;
///
/// let crab = SkyCoord::from_degrees(83.633, 22.0145, Frame::Icrs);
/// let t = Instant::from_jd(2451545.0).unwrap();
///
/// let gal = crab.convert_to(Frame::Galactic, &t, None).unwrap();
/// assert!((gal.x().degrees() - 184.5574).abs() < 1e-3);
/// assert!((gal.y().degrees() + 5.7844).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkyCoord {
    x: Angle,
    y: Angle,
    frame: Frame,
}

/// Result of [`SkyCoord::convert_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converted {
    pub coord: SkyCoord,
    pub status: PrimitiveStatus,
    /// Present when the target frame is observed.
    pub byproducts: Option<ObservedByproducts>,
}

impl SkyCoord {
    pub fn new(x: Angle, y: Angle, frame: Frame) -> Self {
        Self { x, y, frame }
    }

    pub fn from_degrees(x_deg: f64, y_deg: f64, frame: Frame) -> Self {
        Self::new(Angle::from_degrees(x_deg), Angle::from_degrees(y_deg), frame)
    }

    pub fn icrs(ra: Angle, dec: Angle) -> Self {
        Self::new(ra, dec, Frame::Icrs)
    }

    pub fn cirs(ra: Angle, dec: Angle) -> Self {
        Self::new(ra, dec, Frame::Cirs)
    }

    pub fn galactic(l: Angle, b: Angle) -> Self {
        Self::new(l, b, Frame::Galactic)
    }

    pub fn ecliptic(lon: Angle, lat: Angle) -> Self {
        Self::new(lon, lat, Frame::Ecliptic)
    }

    pub fn observed(azimuth: Angle, zenith: Angle) -> Self {
        Self::new(azimuth, zenith, Frame::Observed)
    }

    pub fn x(&self) -> Angle {
        self.x
    }

    pub fn y(&self) -> Angle {
        self.y
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Altitude for observed coordinates, `None` otherwise.
    pub fn altitude(&self) -> Option<Angle> {
        (self.frame == Frame::Observed).then(|| Angle::HALF_PI - self.y)
    }

    /// Converts with the ERFA kernel and the process-wide correction table.
    ///
    /// `observer` is required when either frame is observed.
    pub fn convert_to(
        &self,
        target: Frame,
        instant: &Instant,
        observer: Option<&Observer>,
    ) -> CoordResult<SkyCoord> {
        let kernel = ErfaKernel;
        let ctx = Context::new(&kernel, instant, corrections::global())
            .with_optional_observer(observer);
        Ok(self.convert_with(&ctx, target)?.coord)
    }

    pub fn convert_with(&self, ctx: &Context<'_>, target: Frame) -> CoordResult<Converted> {
        let conv = transforms::convert(ctx, self.frame, target, self.x, self.y)?;
        Ok(Converted {
            coord: SkyCoord::new(conv.x, conv.y, target),
            status: conv.status,
            byproducts: conv.byproducts,
        })
    }

    /// Great-circle distance to `other`, which must be in the same frame.
    pub fn separation(&self, other: &SkyCoord) -> CoordResult<Angle> {
        self.separation_with(&ErfaKernel, other)
    }

    pub fn separation_with(&self, kernel: &dyn AstroKernel, other: &SkyCoord) -> CoordResult<Angle> {
        if self.frame != other.frame {
            return Err(CoordError::frame_mismatch(self.frame, other.frame));
        }
        let (y1, y2) = match (self.altitude(), other.altitude()) {
            (Some(a1), Some(a2)) => (a1, a2),
            _ => (self.y, other.y),
        };
        Ok(Angle::from_radians(kernel.separation(
            self.x.radians(),
            y1.radians(),
            other.x.radians(),
            y2.radians(),
        )))
    }
}

/// Same frame and no more than 3 mas apart.
impl PartialEq for SkyCoord {
    fn eq(&self, other: &Self) -> bool {
        self.separation(other)
            .map(|sep| sep.radians() <= EQUALITY_TOLERANCE_RAD)
            .unwrap_or(false)
    }
}

impl fmt::Display for SkyCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(x={:.6}°, y={:.6}°)",
            self.frame,
            self.x.degrees(),
            self.y.degrees()
        )
    }
}
