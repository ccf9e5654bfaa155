//! Shared building blocks for the celestial coordinate stack.
//!
//! `celestial-core` owns the pieces every other crate leans on: the [`Angle`]
//! type with its sexagesimal parsing and formatting, the error type, physical
//! constants, and the [`kernel`] boundary to the fundamental astronomy
//! library.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Angle type, HMS/DMS parsing and decomposition, range conventions |
//! | [`kernel`] | [`AstroKernel`] trait and the ERFA-backed [`ErfaKernel`] |
//! | [`constants`] | Epochs, unit conversions, atmosphere defaults |
//! | [`errors`] | [`AstroError`] and [`AstroResult`] |
//! | [`math`] | `fmod` |
//!
//! # Re-exports
//!
//! ```
//! use celestial_core::{Angle, AstroError, AstroResult};
//! use celestial_core::{AstroKernel, ErfaKernel, PrimitiveStatus, SiteParams};
//! ```
//!
//! # Design Notes
//!
//! - **Radians internally**: every angle crossing a module boundary is in
//!   radians. Degrees, hours and sexagesimal text exist only at the edges.
//!
//! - **Two-part Julian Dates**: kernel operations take `(date1, date2)`,
//!   usually `(2400000.5, mjd)`, to keep sub-microsecond precision.
//!
//! - **No implicit state**: [`ErfaKernel`] is a unit struct; every call is a
//!   pure function of its arguments.

pub mod angle;
pub mod constants;
pub mod errors;
pub mod kernel;
pub mod math;

pub use angle::Angle;
pub use errors::{AstroError, AstroResult};
pub use kernel::{AstroKernel, ErfaKernel, ObservedSolution, PrimitiveStatus, SiteParams};
