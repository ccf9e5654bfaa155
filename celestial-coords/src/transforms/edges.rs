//! One function per ordered frame pair.
//!
//! Inputs and outputs are `(x, y)` in the conventions of [`Frame`]; observed
//! coordinates are azimuth and zenith angle. The functions return raw
//! primitive output. Range normalization and strict epoch checking happen in
//! [`convert`](super::convert).

use super::{Context, Conversion, Edge, ObservedByproducts};
use crate::{CoordResult, Frame};
use celestial_core::Angle;

pub fn identity(_: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    Ok(Conversion::new(x, y))
}

// Direct edges

pub fn icrs_to_cirs(ctx: &Context<'_>, ra: Angle, dec: Angle) -> CoordResult<Conversion> {
    let (tdb, status) = ctx.tdb()?;
    let (ri, di, _eo) = ctx
        .kernel
        .icrs_to_cirs(ra.radians(), dec.radians(), tdb.jd1, tdb.jd2);
    Ok(Conversion::from_radians(ri, di, status))
}

pub fn cirs_to_icrs(ctx: &Context<'_>, ra: Angle, dec: Angle) -> CoordResult<Conversion> {
    let (tdb, status) = ctx.tdb()?;
    let (rc, dc, _eo) = ctx
        .kernel
        .cirs_to_icrs(ra.radians(), dec.radians(), tdb.jd1, tdb.jd2);
    Ok(Conversion::from_radians(rc, dc, status))
}

pub fn icrs_to_galactic(ctx: &Context<'_>, ra: Angle, dec: Angle) -> CoordResult<Conversion> {
    let (l, b) = ctx.kernel.icrs_to_galactic(ra.radians(), dec.radians());
    Ok(Conversion::from_radians(l, b, Default::default()))
}

pub fn galactic_to_icrs(ctx: &Context<'_>, l: Angle, b: Angle) -> CoordResult<Conversion> {
    let (ra, dec) = ctx.kernel.galactic_to_icrs(l.radians(), b.radians());
    Ok(Conversion::from_radians(ra, dec, Default::default()))
}

pub fn icrs_to_ecliptic(ctx: &Context<'_>, ra: Angle, dec: Angle) -> CoordResult<Conversion> {
    let (tt, status) = ctx.tt()?;
    let (lon, lat) = ctx
        .kernel
        .icrs_to_ecliptic(tt.jd1, tt.jd2, ra.radians(), dec.radians());
    Ok(Conversion::from_radians(lon, lat, status))
}

pub fn ecliptic_to_icrs(ctx: &Context<'_>, lon: Angle, lat: Angle) -> CoordResult<Conversion> {
    let (tt, status) = ctx.tt()?;
    let (ra, dec) = ctx
        .kernel
        .ecliptic_to_icrs(tt.jd1, tt.jd2, lon.radians(), lat.radians());
    Ok(Conversion::from_radians(ra, dec, status))
}

pub fn cirs_to_observed(ctx: &Context<'_>, ra: Angle, dec: Angle) -> CoordResult<Conversion> {
    let site = ctx.site(Frame::Cirs, Frame::Observed)?;
    let (utc1, utc2) = ctx.instant.utc_split();
    let (solution, status) =
        ctx.kernel
            .cirs_to_observed(ra.radians(), dec.radians(), utc1, utc2, &site)?;

    Ok(Conversion {
        byproducts: Some(ObservedByproducts {
            hour_angle: Angle::from_radians(solution.hour_angle),
            observed_cirs: (
                Angle::from_radians(solution.ra),
                Angle::from_radians(solution.dec),
            ),
            observed_source: None,
        }),
        ..Conversion::from_radians(solution.azimuth, solution.zenith, status)
    })
}

pub fn observed_to_cirs(ctx: &Context<'_>, az: Angle, zen: Angle) -> CoordResult<Conversion> {
    let site = ctx.site(Frame::Observed, Frame::Cirs)?;
    let (utc1, utc2) = ctx.instant.utc_split();
    let ((ri, di), status) =
        ctx.kernel
            .observed_to_cirs(az.radians(), zen.radians(), utc1, utc2, &site)?;
    Ok(Conversion::from_radians(ri, di, status))
}

// Composed edges

/// Runs `chain` from `(x, y)`.
fn compose(ctx: &Context<'_>, x: Angle, y: Angle, chain: &[Edge]) -> CoordResult<Conversion> {
    chain
        .iter()
        .try_fold(Conversion::new(x, y), |acc, edge| acc.then(ctx, *edge))
}

/// Re-expresses the refracted CIRS position in the source frame.
fn with_observed_source(
    ctx: &Context<'_>,
    mut conv: Conversion,
    back: &[Edge],
) -> CoordResult<Conversion> {
    if let Some(mut products) = conv.byproducts {
        let (ra, dec) = products.observed_cirs;
        let source = compose(ctx, ra, dec, back)?;
        products.observed_source = Some((source.x, source.y));
        conv.status = conv.status.merge(source.status);
        conv.byproducts = Some(products);
    }
    Ok(conv)
}

pub fn cirs_to_galactic(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[cirs_to_icrs, icrs_to_galactic])
}

pub fn galactic_to_cirs(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[galactic_to_icrs, icrs_to_cirs])
}

pub fn cirs_to_ecliptic(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[cirs_to_icrs, icrs_to_ecliptic])
}

pub fn ecliptic_to_cirs(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[ecliptic_to_icrs, icrs_to_cirs])
}

pub fn galactic_to_ecliptic(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[galactic_to_icrs, icrs_to_ecliptic])
}

pub fn ecliptic_to_galactic(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[ecliptic_to_icrs, icrs_to_galactic])
}

pub fn icrs_to_observed(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    let conv = compose(ctx, x, y, &[icrs_to_cirs, cirs_to_observed])?;
    with_observed_source(ctx, conv, &[cirs_to_icrs])
}

pub fn galactic_to_observed(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    let conv = compose(ctx, x, y, &[galactic_to_icrs, icrs_to_cirs, cirs_to_observed])?;
    with_observed_source(ctx, conv, &[cirs_to_icrs, icrs_to_galactic])
}

pub fn ecliptic_to_observed(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    let conv = compose(ctx, x, y, &[ecliptic_to_icrs, icrs_to_cirs, cirs_to_observed])?;
    with_observed_source(ctx, conv, &[cirs_to_icrs, icrs_to_ecliptic])
}

pub fn observed_to_icrs(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[observed_to_cirs, cirs_to_icrs])
}

pub fn observed_to_galactic(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[observed_to_cirs, cirs_to_icrs, icrs_to_galactic])
}

pub fn observed_to_ecliptic(ctx: &Context<'_>, x: Angle, y: Angle) -> CoordResult<Conversion> {
    compose(ctx, x, y, &[observed_to_cirs, cirs_to_icrs, icrs_to_ecliptic])
}
