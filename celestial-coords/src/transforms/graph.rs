use super::edges::*;
use super::{Context, Conversion, Edge};
use crate::{CoordError, CoordResult, Frame};
use celestial_core::angle::NormalizeMode;
use celestial_core::{Angle, AstroError};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, warn};

use Frame::{Cirs, Ecliptic, Galactic, Icrs, Observed};

struct Route {
    edge: Edge,
    /// Frames visited between source and destination.
    via: &'static [Frame],
}

static ROUTES: Lazy<HashMap<(Frame, Frame), Route>> = Lazy::new(|| {
    let entries: [(Frame, Frame, Edge, &'static [Frame]); 20] = [
        (Cirs, Icrs, cirs_to_icrs, &[]),
        (Cirs, Galactic, cirs_to_galactic, &[Icrs]),
        (Cirs, Observed, cirs_to_observed, &[]),
        (Cirs, Ecliptic, cirs_to_ecliptic, &[Icrs]),
        (Icrs, Cirs, icrs_to_cirs, &[]),
        (Icrs, Galactic, icrs_to_galactic, &[]),
        (Icrs, Observed, icrs_to_observed, &[Cirs]),
        (Icrs, Ecliptic, icrs_to_ecliptic, &[]),
        (Galactic, Cirs, galactic_to_cirs, &[Icrs]),
        (Galactic, Icrs, galactic_to_icrs, &[]),
        (Galactic, Observed, galactic_to_observed, &[Icrs, Cirs]),
        (Galactic, Ecliptic, galactic_to_ecliptic, &[Icrs]),
        (Observed, Cirs, observed_to_cirs, &[]),
        (Observed, Icrs, observed_to_icrs, &[Cirs]),
        (Observed, Galactic, observed_to_galactic, &[Cirs, Icrs]),
        (Observed, Ecliptic, observed_to_ecliptic, &[Cirs, Icrs]),
        (Ecliptic, Cirs, ecliptic_to_cirs, &[Icrs]),
        (Ecliptic, Icrs, ecliptic_to_icrs, &[]),
        (Ecliptic, Galactic, ecliptic_to_galactic, &[Icrs]),
        (Ecliptic, Observed, ecliptic_to_observed, &[Icrs, Cirs]),
    ];

    let mut routes: HashMap<_, _> = entries
        .into_iter()
        .map(|(from, to, edge, via)| ((from, to), Route { edge, via }))
        .collect();
    for f in Frame::ALL {
        routes.insert(
            (f, f),
            Route {
                edge: identity,
                via: &[],
            },
        );
    }
    routes
});

/// Frames a conversion passes through between `from` and `to`, exclusive.
pub fn route(from: Frame, to: Frame) -> &'static [Frame] {
    ROUTES.get(&(from, to)).map_or(&[], |r| r.via)
}

/// Converts `(x, y)` from `from` to `to`.
///
/// The output x is wrapped to [0, 2π). Unless `from == to`, a y outside the
/// destination frame's range is folded back over the pole, which also moves x
/// by π; the identity conversion leaves y as given. A dubious epoch is logged and, with
/// [`TransformConfig::strict_epoch`](super::TransformConfig), returned as
/// [`CoordError::DubiousEpoch`].
///
/// # Errors
///
/// - [`CoordError::MissingObserver`] when either frame is observed and the
///   context has no observer.
/// - The kernel's [`PrimitiveError`](celestial_core::AstroError::PrimitiveError)
///   for an unacceptable date.
/// - The correction table's load error under `FailFast`.
pub fn convert(
    ctx: &Context<'_>,
    from: Frame,
    to: Frame,
    x: Angle,
    y: Angle,
) -> CoordResult<Conversion> {
    let route = ROUTES.get(&(from, to)).ok_or_else(|| {
        AstroError::invalid_value("convert", format!("no route from {} to {}", from, to))
    })?;
    debug!(%from, %to, via = ?route.via, "converting coordinates");

    let mut conv = (route.edge)(ctx, x, y).map_err(|e| match e {
        CoordError::MissingObserver { .. } => CoordError::missing_observer(from, to),
        other => other,
    })?;

    if conv.is_dubious() {
        let mjd = ctx.instant.mjd();
        warn!(%from, %to, mjd, "dubious epoch: result may be inaccurate");
        if ctx.config.strict_epoch {
            return Err(CoordError::DubiousEpoch { from, to, mjd });
        }
    }

    if from == to {
        conv.x = Angle::from_radians(NormalizeMode::Longitude.apply(conv.x.radians()));
    } else {
        let (x, y) = to.y_mode().apply_pair(conv.x.radians(), conv.y.radians());
        conv.x = Angle::from_radians(x);
        conv.y = Angle::from_radians(y);
    }
    Ok(conv)
}
