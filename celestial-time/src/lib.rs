//! Instants, time scales and Earth-orientation corrections.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`instant`] | [`Instant`]: JD, MJD and Gregorian views of one UTC instant |
//! | [`running`] | [`RunningInstant`]: a date that follows the clock at an adjustable speed |
//! | [`julian`] | [`JulianDate`]: two-part Julian Date |
//! | [`calendar`] | Gregorian ⇄ Julian Date conversion, packed `YYYYMMDD.f` dates |
//! | [`timescales`] | UTC → UT1, TT, TDB through an [`AstroKernel`](celestial_core::AstroKernel) |
//! | [`corrections`] | UT1-UTC and polar motion table (finals2000A), interpolation, process-wide cache |
//! | [`errors`] | [`TimeError`] and [`TimeResult`] |
//!
//! # Example
//!
//! ```
//! use celestial_core::ErfaKernel;
//! use celestial_time::corrections::{CorrectionRecord, CorrectionTable};
//! use celestial_time::{timescales, Instant};
//!
//! let table = CorrectionTable::from_records(vec![
//!     CorrectionRecord::new(51544.0, 0.3554, 0.0, 0.0),
//!     CorrectionRecord::new(51545.0, 0.3546, 0.0, 0.0),
//! ]);
//!
//! let t = Instant::from_jd(2451545.0)?;
//! let dut1 = t.dut1(&table)?.value;
//! let (tdb, status) = timescales::utc_to_tdb(&ErfaKernel, &t, dut1)?;
//! assert!(!status.is_dubious());
//! assert!(tdb.to_f64() > t.jd());
//! # Ok::<(), celestial_time::TimeError>(())
//! ```

pub mod calendar;
pub mod corrections;
pub mod errors;
pub mod instant;
pub mod julian;
pub mod running;
pub mod timescales;

pub use calendar::GregorianDate;
pub use corrections::{CorrectionTable, EopSample};
pub use errors::{TimeError, TimeResult};
pub use instant::Instant;
pub use julian::JulianDate;
pub use running::RunningInstant;
