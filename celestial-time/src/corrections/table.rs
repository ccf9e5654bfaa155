use super::config::{CorrectionsBuilder, CorrectionsConfig, LoadPolicy, TableFormat};
use super::interpolate;
use super::parse::{parse_finals, parse_simple};
use super::record::{CorrectionRecord, EopSample};
use crate::{TimeError, TimeResult};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};

/// Read-only Earth-orientation table, loaded at most once.
///
/// A table built from a path reads the file on first use and keeps the rows
/// (or the load error) for its whole lifetime. [`reload`](Self::reload) hands
/// back a fresh value that will read the file again.
///
/// ```
/// use celestial_time::corrections::{CorrectionRecord, CorrectionTable};
///
/// let table = CorrectionTable::from_records(vec![
///     CorrectionRecord::new(51544.0, 0.3554, 0.0, 0.0),
///     CorrectionRecord::new(51545.0, 0.3546, 0.0, 0.0),
/// ])
/// .with_interpolation(true);
///
/// let s = table.lookup(51544.5).unwrap();
/// assert!((s.dut1 - 0.355).abs() < 1e-9);
/// assert!(!s.extrapolated);
/// ```
#[derive(Debug)]
pub struct CorrectionTable {
    config: CorrectionsConfig,
    rows: OnceCell<Result<Vec<CorrectionRecord>, TimeError>>,
    degraded_warned: AtomicBool,
}

impl CorrectionTable {
    pub fn new(config: CorrectionsConfig) -> Self {
        Self {
            config,
            rows: OnceCell::new(),
            degraded_warned: AtomicBool::new(false),
        }
    }

    pub fn builder() -> CorrectionsBuilder {
        CorrectionsBuilder::new()
    }

    /// Table over in-memory rows. The rows are sorted by MJD.
    pub fn from_records(mut records: Vec<CorrectionRecord>) -> Self {
        records.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));
        let table = Self::new(CorrectionsConfig::default());
        let loaded = if records.is_empty() {
            Err(TimeError::table_load(None, "table has no rows"))
        } else {
            Ok(records)
        };
        let _ = table.rows.set(loaded);
        table
    }

    /// Reads and parses `path` immediately.
    ///
    /// # Errors
    ///
    /// [`TimeError::CorrectionTableLoad`] if the file cannot be read or holds
    /// no usable rows.
    pub fn from_file<P: Into<PathBuf>>(path: P) -> TimeResult<Self> {
        let table = Self::builder().with_path(path).build();
        table.records()?;
        Ok(table)
    }

    /// A table without data: every lookup returns zero corrections flagged
    /// `degraded`.
    pub fn empty() -> Self {
        Self::builder()
            .with_load_policy(LoadPolicy::DegradeToZero)
            .build()
    }

    pub fn with_interpolation(mut self, on: bool) -> Self {
        self.config.interpolate = Some(on);
        self
    }

    pub fn with_max_gap(mut self, days: f64) -> Self {
        self.config.max_gap_days = days;
        self
    }

    pub fn config(&self) -> &CorrectionsConfig {
        &self.config
    }

    pub fn path(&self) -> Option<&Path> {
        self.config.path.as_deref()
    }

    /// Whether lookups interpolate, resolving the process-wide default.
    pub fn interpolates(&self) -> bool {
        self.config.interpolate.unwrap_or_else(super::interpolation)
    }

    /// The loaded rows, loading them on first call.
    pub fn records(&self) -> TimeResult<&[CorrectionRecord]> {
        match self.rows.get_or_init(|| self.load()) {
            Ok(rows) => Ok(rows),
            Err(e) => Err(e.clone()),
        }
    }

    fn load(&self) -> Result<Vec<CorrectionRecord>, TimeError> {
        let Some(path) = self.config.path.as_ref() else {
            return Err(TimeError::table_load(None, "no correction table configured"));
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| TimeError::table_load(Some(path.clone()), e.to_string()))?;

        let parsed = match self.config.format {
            TableFormat::Finals => parse_finals(&content),
            TableFormat::Simple => parse_simple(&content),
            TableFormat::Auto => parse_finals(&content).or_else(|_| parse_simple(&content)),
        };

        let rows = parsed.map_err(|e| {
            let message = match e {
                TimeError::CorrectionTableLoad { message, .. } => message,
                other => other.to_string(),
            };
            TimeError::table_load(Some(path.clone()), message)
        })?;

        debug!(
            path = %path.display(),
            rows = rows.len(),
            first = rows[0].mjd,
            last = rows[rows.len() - 1].mjd,
            "loaded correction table"
        );
        Ok(rows)
    }

    /// Corrections for `mjd` (UTC).
    ///
    /// # Errors
    ///
    /// Under [`LoadPolicy::FailFast`], the load error if the table has no data.
    pub fn lookup(&self, mjd: f64) -> TimeResult<EopSample> {
        match self.records() {
            Ok(rows) => Ok(interpolate::sample(
                rows,
                mjd,
                self.interpolates(),
                self.config.max_gap_days,
            )),
            Err(e) if self.config.load_policy == LoadPolicy::DegradeToZero && e.is_recoverable() => {
                if !self.degraded_warned.swap(true, Ordering::Relaxed) {
                    warn!(error = %e, "correction table unavailable, using zero corrections");
                }
                Ok(EopSample::zero(mjd))
            }
            Err(e) => Err(e),
        }
    }

    /// `(first, last)` MJD covered, or `None` without data.
    pub fn span(&self) -> Option<(f64, f64)> {
        let rows = self.records().ok()?;
        Some((rows[0].mjd, rows[rows.len() - 1].mjd))
    }

    pub fn len(&self) -> usize {
        self.records().map_or(0, <[CorrectionRecord]>::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A new table with the same configuration. File-backed tables read
    /// their file again on first use; in-memory tables keep their rows.
    pub fn reload(&self) -> Self {
        let table = Self::new(self.config.clone());
        if self.config.path.is_none() {
            if let Some(rows) = self.rows.get() {
                let _ = table.rows.set(rows.clone());
            }
        }
        table
    }
}
