mod core;
mod format;
mod normalize;
mod ops;
mod parse;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::{Angle, Sexagesimal};
pub use format::{DmsFmt, HmsFmt};
pub use normalize::{
    clamp_dec, clamp_zenith, fold_latitude, fold_zenith, wrap_0_2pi, wrap_pm_pi, NormalizeMode,
};
pub use parse::{parse_sexagesimal, AngleUnits, ParseAngle, AUTO_DELIMITERS};

pub use self::core::{arcmin, arcsec, deg, hours, rad};
