use celestial_core::AstroError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by instants, time-scale shifts and the correction table.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// Calendar, parsing and primitive failures from the core crate.
    #[error(transparent)]
    Core(#[from] AstroError),

    /// The correction table file could not be read or held no usable rows.
    #[error("Correction table load failed for {}: {message}", display_path(.path))]
    CorrectionTableLoad {
        path: Option<PathBuf>,
        message: String,
    },

    /// A finals line or simple row was structurally invalid.
    #[error("Correction table parse error at line {line}: {message}")]
    CorrectionTableParse { line: usize, message: String },

    /// The instant cannot be represented (non-finite JD, outside chrono range).
    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "<no path configured>".to_string(),
    }
}

pub type TimeResult<T> = Result<T, TimeError>;

impl TimeError {
    pub fn table_load(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::CorrectionTableLoad {
            path,
            message: message.into(),
        }
    }

    pub fn table_parse(line: usize, message: impl Into<String>) -> Self {
        Self::CorrectionTableParse {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_epoch(message: impl Into<String>) -> Self {
        Self::InvalidEpoch(message.into())
    }

    /// `true` when a fallback (another file, zero corrections) makes sense.
    /// Only table data failures qualify.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::CorrectionTableLoad { .. } | Self::CorrectionTableParse { .. }
        )
    }
}
