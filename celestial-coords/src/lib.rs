//! Sky coordinates and conversions between CIRS, ICRS, Galactic, Observed and
//! Ecliptic frames.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`sky`] | [`SkyCoord`]: a position plus its frame, conversion, separation |
//! | [`frame`] | [`Frame`] enum |
//! | [`observer`] | [`Observer`]: site location and atmosphere |
//! | [`transforms`] | The conversion graph, per-edge functions, [`Context`](transforms::Context) |
//! | [`errors`] | [`CoordError`] and [`CoordResult`] |
//!
//! # Example
//!
//! ```
//! use celestial_coords::{Frame, Observer, SkyCoord};
//! use celestial_time::Instant;
//!
//! let t = Instant::from_gregorian(2024, 3, 20, 0.25).unwrap();
//! let site = Observer::from_degrees(-17.88, 28.76, 2396.0);
//!
//! let crab = SkyCoord::from_degrees(83.633, 22.0145, Frame::Icrs);
//! let obs = crab.convert_to(Frame::Observed, &t, Some(&site)).unwrap();
//! assert!((0.0..360.0).contains(&obs.x().degrees()));
//! assert!((0.0..=180.0).contains(&obs.y().degrees()));
//! ```
//!
//! Conversions through [`SkyCoord::convert_to`] read Earth-orientation values
//! from [`celestial_time::corrections::global`], whose file is named by the
//! `CELESTIAL_FINALS_PATH` environment variable. Without it the corrections
//! are zero.

pub mod errors;
pub mod frame;
pub mod observer;
pub mod sky;
pub mod transforms;

pub use celestial_core::Angle;
pub use errors::{CoordError, CoordResult};
pub use frame::Frame;
pub use observer::{Observer, ObserverBuilder};
pub use sky::{Converted, SkyCoord};
pub use transforms::{Context, Conversion, ObservedByproducts, TransformConfig};
