use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a table does when its data cannot be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoadPolicy {
    /// Every lookup returns the load error.
    #[default]
    FailFast,
    /// Lookups return zero corrections flagged `degraded`; a warning is
    /// logged once per table.
    DegradeToZero,
}

/// On-disk layout of the table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TableFormat {
    /// Try finals2000A first, then simple rows.
    #[default]
    Auto,
    Finals,
    /// `mjd dut1 xp yp [dpsi deps]` rows.
    Simple,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CorrectionsConfig {
    /// `None` follows the process-wide toggle
    /// ([`set_interpolation`](super::set_interpolation)).
    pub interpolate: Option<bool>,

    pub load_policy: LoadPolicy,

    pub path: Option<PathBuf>,

    pub format: TableFormat,

    /// Neighbouring rows further apart than this are not interpolated
    /// between; the lower row is used as is.
    pub max_gap_days: f64,
}

impl Default for CorrectionsConfig {
    fn default() -> Self {
        Self {
            interpolate: None,
            load_policy: LoadPolicy::FailFast,
            path: None,
            format: TableFormat::Auto,
            max_gap_days: 5.0,
        }
    }
}

pub struct CorrectionsBuilder {
    config: CorrectionsConfig,
}

impl CorrectionsBuilder {
    pub fn new() -> Self {
        Self {
            config: CorrectionsConfig::default(),
        }
    }

    pub fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.path = Some(path.into());
        self
    }

    pub fn with_format(mut self, format: TableFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn with_interpolation(mut self, on: bool) -> Self {
        self.config.interpolate = Some(on);
        self
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.config.load_policy = policy;
        self
    }

    pub fn with_max_gap(mut self, days: f64) -> Self {
        self.config.max_gap_days = days;
        self
    }

    pub fn config(self) -> CorrectionsConfig {
        self.config
    }

    /// Builds a lazily loading table. Nothing is read until the first lookup.
    pub fn build(self) -> super::CorrectionTable {
        super::CorrectionTable::new(self.config)
    }
}

impl Default for CorrectionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
