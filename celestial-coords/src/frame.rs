use celestial_core::angle::NormalizeMode;
use celestial_core::AstroError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reference frame of a [`SkyCoord`](crate::SkyCoord).
///
/// | Frame | x | y |
/// |-------|---|---|
/// | `Cirs` | CIO-based right ascension | declination |
/// | `Icrs` | right ascension | declination |
/// | `Galactic` | galactic longitude | galactic latitude |
/// | `Observed` | azimuth (north through east) | **zenith** angle |
/// | `Ecliptic` | ecliptic longitude | ecliptic latitude |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Frame {
    Cirs,
    Icrs,
    Galactic,
    Observed,
    Ecliptic,
}

impl Frame {
    pub const ALL: [Frame; 5] = [
        Frame::Cirs,
        Frame::Icrs,
        Frame::Galactic,
        Frame::Observed,
        Frame::Ecliptic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Frame::Cirs => "CIRS",
            Frame::Icrs => "ICRS",
            Frame::Galactic => "GALACTIC",
            Frame::Observed => "OBSERVED",
            Frame::Ecliptic => "ECLIPTIC",
        }
    }

    /// Conversions into or out of this frame need an observer.
    pub fn needs_observer(self) -> bool {
        self == Frame::Observed
    }

    /// Range convention of the y coordinate.
    pub fn y_mode(self) -> NormalizeMode {
        match self {
            Frame::Observed => NormalizeMode::Zenith,
            _ => NormalizeMode::Latitude,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frame {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Frame::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                AstroError::invalid_value(
                    "Frame::from_str",
                    format!(
                        "unknown frame '{}', expected one of CIRS, ICRS, GALACTIC, OBSERVED, ECLIPTIC",
                        s
                    ),
                )
            })
    }
}
