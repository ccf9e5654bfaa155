use celestial_coords::transforms::Context;
use celestial_coords::{Frame, Observer, SkyCoord};
use celestial_core::angle::{DmsFmt, HmsFmt, Sexagesimal};
use celestial_core::{Angle, ErfaKernel};
use celestial_time::corrections::{CorrectionRecord, CorrectionTable};
use celestial_time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // --- Setup: observer, time, corrections ---

    // McDonald Observatory, Texas
    let observer = Observer::builder()
        .longitude_deg(-104.0225)
        .latitude_deg(30.6714)
        .elevation_m(2070.0)
        .temperature_c(12.0)
        .relative_humidity(0.2)
        .build()?;

    // 2023-06-15 03:00 UTC
    let utc = Instant::from_gregorian(2023, 6, 15, 0.125)?;
    println!("Epoch: {}", utc);
    println!(
        "Observer: McDonald Observatory ({:.4}°N, {:.4}°W, {:.0} m, {:.1} hPa)\n",
        observer.latitude().degrees(),
        -observer.longitude().degrees(),
        observer.elevation_m(),
        observer.pressure_hpa()
    );

    // IERS values around the date (dut1 s, xp/yp rad)
    let mas = celestial_core::constants::MILLIARCSEC_TO_RAD;
    let table = CorrectionTable::from_records(vec![
        CorrectionRecord::new(60110.0, -0.0312, 183.0 * mas, 343.0 * mas),
        CorrectionRecord::new(60111.0, -0.0319, 184.0 * mas, 341.0 * mas),
    ]);

    let ctx = Context::new(&ErfaKernel, &utc, &table).with_observer(&observer);

    // --- Vega ---

    let vega = SkyCoord::icrs(
        Angle::from_sexagesimal("18:36:56.34", Sexagesimal::Hms, None)?,
        Angle::from_sexagesimal("+38 47 01.3", Sexagesimal::Dms, None)?,
    );
    let hms = HmsFmt { frac_digits: 2 };
    let dms = DmsFmt { frac_digits: 1 };

    println!("=== Vega ===");
    println!("{:<9} {}", "ICRS:", vega);

    for frame in [Frame::Cirs, Frame::Galactic, Frame::Ecliptic] {
        let c = vega.convert_with(&ctx, frame)?.coord;
        println!("{:<9} {}", format!("{}:", frame), c);
    }

    let observed = vega.convert_with(&ctx, Frame::Observed)?;
    let altaz = observed.coord;
    println!(
        "Observed: Az = {:.4}°  Zen = {:.4}°  Alt = {:.4}°",
        altaz.x().degrees(),
        altaz.y().degrees(),
        altaz.altitude().unwrap_or_default().degrees()
    );

    if let Some(products) = observed.byproducts {
        println!("          HA = {}", hms.fmt(products.hour_angle));
        let (ra, dec) = products.observed_cirs;
        println!("          refracted CIRS RA = {}  Dec = {}", hms.fmt(ra), dms.fmt(dec));
        if let Some((ra, dec)) = products.observed_source {
            println!("          refracted ICRS RA = {}  Dec = {}", ra.to_hms(':'), dec.to_dms(':'));
        }
    }

    // --- Back to ICRS ---

    let back = altaz.convert_with(&ctx, Frame::Icrs)?.coord;
    println!(
        "\nRound trip ICRS -> Observed -> ICRS: {:.3} mas ({})",
        vega.separation(&back)?.arcseconds() * 1000.0,
        if back == vega { "equal" } else { "not equal" }
    );

    Ok(())
}
