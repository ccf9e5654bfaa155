//! The coordinate transformation graph.
//!
//! Every ordered pair of [`Frame`]s has exactly one conversion. Direct edges
//! call a single kernel primitive:
//!
//! ```text
//!                Galactic
//!                   │ (no date)
//!   Observed ── CIRS ── ICRS ── Ecliptic
//!     (UTC, site)  (TDB)   (TT, IAU 2006)
//! ```
//!
//! All other pairs are composed along this chain (for example Galactic to
//! Observed goes Galactic → ICRS → CIRS → Observed). [`convert`] looks the
//! pair up in a table built once per process; identity pairs return the input
//! without touching the kernel.
//!
//! The per-edge functions in [`edges`] can also be called directly. They
//! share one signature, [`Edge`].

pub mod edges;
mod graph;

pub use edges::*;
pub use graph::{convert, route};

use crate::{CoordError, CoordResult, Frame, Observer};
use celestial_core::{Angle, AstroKernel, PrimitiveStatus, SiteParams};
use celestial_time::timescales::{self, Shifted};
use celestial_time::{CorrectionTable, EopSample, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A conversion between two frames: `(context, x, y) -> result`.
pub type Edge = fn(&Context<'_>, Angle, Angle) -> CoordResult<Conversion>;

/// Options for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransformConfig {
    /// Turn a [`PrimitiveStatus::DubiousEpoch`] into
    /// [`CoordError::DubiousEpoch`] instead of returning the result.
    pub strict_epoch: bool,
}

/// Everything a conversion may need besides the coordinates.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub kernel: &'a dyn AstroKernel,
    pub instant: &'a Instant,
    pub observer: Option<&'a Observer>,
    pub corrections: &'a CorrectionTable,
    pub config: TransformConfig,
}

impl<'a> Context<'a> {
    pub fn new(
        kernel: &'a dyn AstroKernel,
        instant: &'a Instant,
        corrections: &'a CorrectionTable,
    ) -> Self {
        Self {
            kernel,
            instant,
            observer: None,
            corrections,
            config: TransformConfig::default(),
        }
    }

    pub fn with_observer(mut self, observer: &'a Observer) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn with_optional_observer(mut self, observer: Option<&'a Observer>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_config(mut self, config: TransformConfig) -> Self {
        self.config = config;
        self
    }

    pub fn eop(&self) -> CoordResult<EopSample> {
        Ok(self.instant.corrections(self.corrections)?)
    }

    /// TDB of the instant, the epoch of the ICRS/CIRS edge.
    pub fn tdb(&self) -> CoordResult<Shifted> {
        let dut1 = self.eop()?.dut1;
        Ok(timescales::utc_to_tdb(self.kernel, self.instant, dut1)?)
    }

    /// TT of the instant, the epoch of the ICRS/Ecliptic edge.
    pub fn tt(&self) -> CoordResult<Shifted> {
        Ok(timescales::utc_to_tt(self.kernel, self.instant)?)
    }

    /// Validated site snapshot for the observed-place edges.
    pub fn site(&self, from: Frame, to: Frame) -> CoordResult<SiteParams> {
        let observer = self
            .observer
            .ok_or_else(|| CoordError::missing_observer(from, to))?;
        observer.validate()?;
        Ok(observer.snapshot(&self.eop()?))
    }
}

/// Extra outputs of a conversion that ends in the observed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservedByproducts {
    pub hour_angle: Angle,
    /// Refracted position as CIRS `(ra, dec)`.
    pub observed_cirs: (Angle, Angle),
    /// Refracted position expressed in the source frame. `None` when the
    /// source frame is CIRS.
    pub observed_source: Option<(Angle, Angle)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conversion {
    pub x: Angle,
    pub y: Angle,
    pub status: PrimitiveStatus,
    pub byproducts: Option<ObservedByproducts>,
}

impl Conversion {
    pub fn new(x: Angle, y: Angle) -> Self {
        Self {
            x,
            y,
            status: PrimitiveStatus::Ok,
            byproducts: None,
        }
    }

    pub fn from_radians(x: f64, y: f64, status: PrimitiveStatus) -> Self {
        Self {
            status,
            ..Self::new(Angle::from_radians(x), Angle::from_radians(y))
        }
    }

    /// Feeds this result into the next edge. The worse status wins and the
    /// byproducts of the later edge replace earlier ones.
    pub fn then(self, ctx: &Context<'_>, edge: Edge) -> CoordResult<Self> {
        let next = edge(ctx, self.x, self.y)?;
        Ok(Self {
            status: self.status.merge(next.status),
            byproducts: next.byproducts.or(self.byproducts),
            ..next
        })
    }

    pub fn is_dubious(&self) -> bool {
        self.status.is_dubious()
    }
}
