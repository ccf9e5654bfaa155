//! Earth-orientation corrections: UT1-UTC, polar motion and nutation offsets.
//!
//! | Piece | Purpose |
//! |-------|---------|
//! | [`CorrectionTable`] | Load-once table with floor/interpolated lookup |
//! | [`CorrectionsConfig`] / [`CorrectionsBuilder`] | Path, format, interpolation, load policy |
//! | [`parse_finals`] / [`parse_simple`] | File parsers |
//! | [`global`] | Process-wide table used by the high-level conversion API |
//!
//! # Process-wide table
//!
//! [`global`] is built on first use. Its file path is read from the
//! `CELESTIAL_FINALS_PATH` environment variable. It uses
//! [`LoadPolicy::DegradeToZero`]: without a readable file every lookup yields
//! zero corrections flagged `degraded`, and a single warning is logged.
//!
//! Tables whose config leaves `interpolate` unset follow the process-wide
//! toggle ([`set_interpolation`]), which starts enabled.

mod config;
mod interpolate;
mod parse;
mod record;
mod table;

pub use config::{CorrectionsBuilder, CorrectionsConfig, LoadPolicy, TableFormat};
pub use parse::{parse_finals, parse_finals_line, parse_simple};
pub use record::{Correction, CorrectionRecord, EopSample};
pub use table::CorrectionTable;

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable naming the finals2000A file for [`global`].
pub const FINALS_PATH_ENV: &str = "CELESTIAL_FINALS_PATH";

static INTERPOLATE: AtomicBool = AtomicBool::new(true);

static GLOBAL: Lazy<CorrectionTable> = Lazy::new(|| {
    let mut builder = CorrectionTable::builder().with_load_policy(LoadPolicy::DegradeToZero);
    if let Some(path) = std::env::var_os(FINALS_PATH_ENV) {
        builder = builder.with_path(path);
    }
    builder.build()
});

/// The process-wide correction table.
pub fn global() -> &'static CorrectionTable {
    &GLOBAL
}

pub fn set_interpolation(on: bool) {
    INTERPOLATE.store(on, Ordering::Relaxed);
}

pub fn interpolation() -> bool {
    INTERPOLATE.load(Ordering::Relaxed)
}
