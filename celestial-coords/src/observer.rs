//! Observer location and atmospheric conditions.
//!
//! An [`Observer`] is a plain value: the conversion layer reads it through
//! [`Observer::snapshot`], which freezes it together with the Earth-orientation
//! values of the instant into the [`SiteParams`] handed to the observed-place
//! primitives. Tracking loops may update an observer between conversions with
//! the `set_*` methods; no conversion ever sees a half-updated observer.
//!
//! With no explicit pressure the standard atmosphere at the observer's
//! elevation is assumed:
//!
//! ```text
//! P = 1013.25 hPa * exp(-h / (29.3 m/K * T))
//! ```
//!
//! Setting the pressure to zero switches refraction off.

use crate::CoordResult;
use celestial_core::constants::{
    BAROMETRIC_SCALE_M_PER_K, CELSIUS_TO_KELVIN, DEFAULT_WAVELENGTH_UM, HALF_PI,
    SEA_LEVEL_PRESSURE_HPA, SEA_LEVEL_TEMP_C, SEA_LEVEL_TEMP_K,
};
use celestial_core::{Angle, AstroError, SiteParams};
use celestial_time::{EopSample, Instant, TimeResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pressure in hPa of the isothermal standard atmosphere at `elevation_m`.
pub fn estimate_pressure_hpa(elevation_m: f64, temperature_k: f64) -> f64 {
    SEA_LEVEL_PRESSURE_HPA * libm::exp(-elevation_m / (BAROMETRIC_SCALE_M_PER_K * temperature_k))
}

/// Inverse of [`estimate_pressure_hpa`].
pub fn estimate_elevation_m(pressure_hpa: f64, temperature_k: f64) -> f64 {
    -BAROMETRIC_SCALE_M_PER_K * temperature_k * libm::log(pressure_hpa / SEA_LEVEL_PRESSURE_HPA)
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    longitude: Angle,
    latitude: Angle,
    elevation_m: f64,
    pressure_hpa: f64,
    temperature_c: f64,
    relative_humidity: f64,
    wavelength_um: f64,
    utc_offset_hours: f64,
}

impl Observer {
    /// Observer at a site with standard sea-level conditions, pressure
    /// estimated from `elevation_m`.
    ///
    /// ```
    /// use celestial_coords::Observer;
    /// use celestial_core::Angle;
    ///
    /// let obs = Observer::new(Angle::from_degrees(-17.88), Angle::from_degrees(28.76), 2396.0);
    /// assert!(obs.pressure_hpa() < 800.0);
    /// assert_eq!(obs.temperature_c(), 15.0);
    /// ```
    pub fn new(longitude: Angle, latitude: Angle, elevation_m: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation_m,
            pressure_hpa: estimate_pressure_hpa(elevation_m, SEA_LEVEL_TEMP_K),
            temperature_c: SEA_LEVEL_TEMP_C,
            relative_humidity: 0.0,
            wavelength_um: DEFAULT_WAVELENGTH_UM,
            utc_offset_hours: 0.0,
        }
    }

    pub fn from_degrees(longitude_deg: f64, latitude_deg: f64, elevation_m: f64) -> Self {
        Self::new(
            Angle::from_degrees(longitude_deg),
            Angle::from_degrees(latitude_deg),
            elevation_m,
        )
    }

    pub fn builder() -> ObserverBuilder {
        ObserverBuilder::default()
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    pub fn pressure_hpa(&self) -> f64 {
        self.pressure_hpa
    }

    pub fn temperature_c(&self) -> f64 {
        self.temperature_c
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature_c + CELSIUS_TO_KELVIN
    }

    pub fn relative_humidity(&self) -> f64 {
        self.relative_humidity
    }

    pub fn wavelength_um(&self) -> f64 {
        self.wavelength_um
    }

    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    pub fn with_pressure_hpa(mut self, pressure_hpa: f64) -> CoordResult<Self> {
        self.set_pressure_hpa(pressure_hpa)?;
        Ok(self)
    }

    pub fn with_temperature_c(mut self, temperature_c: f64) -> CoordResult<Self> {
        self.set_temperature_c(temperature_c)?;
        Ok(self)
    }

    pub fn with_relative_humidity(mut self, humidity: f64) -> CoordResult<Self> {
        self.set_relative_humidity(humidity)?;
        Ok(self)
    }

    pub fn with_wavelength_um(mut self, wavelength_um: f64) -> CoordResult<Self> {
        self.set_wavelength_um(wavelength_um)?;
        Ok(self)
    }

    /// Moves the site vertically. The pressure is left as it was.
    pub fn with_elevation_m(mut self, elevation_m: f64) -> CoordResult<Self> {
        self.set_elevation_m(elevation_m)?;
        Ok(self)
    }

    pub fn with_utc_offset(mut self, hours: f64) -> CoordResult<Self> {
        self.set_utc_offset(hours)?;
        Ok(self)
    }

    pub fn set_pressure_hpa(&mut self, pressure_hpa: f64) -> CoordResult<()> {
        self.pressure_hpa = non_negative("pressure_hpa", pressure_hpa)?;
        Ok(())
    }

    pub fn set_temperature_c(&mut self, temperature_c: f64) -> CoordResult<()> {
        self.temperature_c = finite("temperature_c", temperature_c)?;
        Ok(())
    }

    pub fn set_relative_humidity(&mut self, humidity: f64) -> CoordResult<()> {
        if !(0.0..=1.0).contains(&humidity) {
            return Err(invalid(
                "relative_humidity",
                format!("{} outside [0, 1]", humidity),
            ));
        }
        self.relative_humidity = humidity;
        Ok(())
    }

    pub fn set_wavelength_um(&mut self, wavelength_um: f64) -> CoordResult<()> {
        self.wavelength_um = non_negative("wavelength_um", wavelength_um)?;
        Ok(())
    }

    pub fn set_elevation_m(&mut self, elevation_m: f64) -> CoordResult<()> {
        self.elevation_m = finite("elevation_m", elevation_m)?;
        Ok(())
    }

    pub fn set_utc_offset(&mut self, hours: f64) -> CoordResult<()> {
        if !(-24.0..=24.0).contains(&hours) {
            return Err(invalid("utc_offset", format!("{} h outside [-24, 24]", hours)));
        }
        self.utc_offset_hours = hours;
        Ok(())
    }

    pub fn set_location(&mut self, longitude: Angle, latitude: Angle) -> CoordResult<()> {
        check_location(longitude, latitude)?;
        self.longitude = longitude;
        self.latitude = latitude;
        Ok(())
    }

    /// Standard-atmosphere pressure at this site's elevation and temperature.
    pub fn estimate_pressure_from_elevation(&self) -> f64 {
        estimate_pressure_hpa(self.elevation_m, self.temperature_k())
    }

    /// Elevation implied by this site's pressure and temperature.
    pub fn estimate_altitude_from_pressure(&self) -> f64 {
        estimate_elevation_m(self.pressure_hpa, self.temperature_k())
    }

    /// Local civil time of a UTC instant at this site.
    pub fn local_time(&self, utc: &Instant) -> TimeResult<Instant> {
        utc.add_days(self.utc_offset_hours / 24.0)
    }

    /// Checks every field. Fields can only be set through validating
    /// setters, so this fails only for an observer built with non-finite
    /// coordinates through [`Observer::new`].
    pub fn validate(&self) -> CoordResult<()> {
        check_location(self.longitude, self.latitude)?;
        finite("elevation_m", self.elevation_m)?;
        non_negative("pressure_hpa", self.pressure_hpa)?;
        Ok(())
    }

    /// Frozen numeric view for the observed-place primitives.
    pub fn snapshot(&self, eop: &EopSample) -> SiteParams {
        SiteParams {
            dut1: eop.dut1,
            longitude: self.longitude.radians(),
            latitude: self.latitude.radians(),
            elevation_m: self.elevation_m,
            xp: eop.xp,
            yp: eop.yp,
            pressure_hpa: self.pressure_hpa,
            temperature_c: self.temperature_c,
            relative_humidity: self.relative_humidity,
            wavelength_um: self.wavelength_um,
        }
    }
}

/// Builder for an [`Observer`]; all checks run in [`build`](Self::build).
///
/// ```
/// use celestial_coords::Observer;
///
/// let obs = Observer::builder()
///     .longitude_deg(-111.6)
///     .latitude_deg(35.2)
///     .elevation_m(2200.0)
///     .relative_humidity(0.3)
///     .build()
///     .unwrap();
/// assert!((obs.pressure_hpa() - 781.0).abs() < 1.0);
///
/// assert!(Observer::builder().relative_humidity(1.5).build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObserverBuilder {
    longitude: Angle,
    latitude: Angle,
    elevation_m: f64,
    pressure_hpa: Option<f64>,
    temperature_c: Option<f64>,
    relative_humidity: Option<f64>,
    wavelength_um: Option<f64>,
    utc_offset_hours: Option<f64>,
}

impl ObserverBuilder {
    pub fn longitude(mut self, longitude: Angle) -> Self {
        self.longitude = longitude;
        self
    }

    pub fn latitude(mut self, latitude: Angle) -> Self {
        self.latitude = latitude;
        self
    }

    pub fn longitude_deg(self, deg: f64) -> Self {
        self.longitude(Angle::from_degrees(deg))
    }

    pub fn latitude_deg(self, deg: f64) -> Self {
        self.latitude(Angle::from_degrees(deg))
    }

    pub fn elevation_m(mut self, elevation_m: f64) -> Self {
        self.elevation_m = elevation_m;
        self
    }

    pub fn pressure_hpa(mut self, pressure_hpa: f64) -> Self {
        self.pressure_hpa = Some(pressure_hpa);
        self
    }

    pub fn temperature_c(mut self, temperature_c: f64) -> Self {
        self.temperature_c = Some(temperature_c);
        self
    }

    pub fn relative_humidity(mut self, humidity: f64) -> Self {
        self.relative_humidity = Some(humidity);
        self
    }

    pub fn wavelength_um(mut self, wavelength_um: f64) -> Self {
        self.wavelength_um = Some(wavelength_um);
        self
    }

    pub fn utc_offset(mut self, hours: f64) -> Self {
        self.utc_offset_hours = Some(hours);
        self
    }

    pub fn build(self) -> CoordResult<Observer> {
        check_location(self.longitude, self.latitude)?;
        let mut obs = Observer::new(self.longitude, self.latitude, finite("elevation_m", self.elevation_m)?);
        if let Some(t) = self.temperature_c {
            obs.set_temperature_c(t)?;
        }
        if let Some(p) = self.pressure_hpa {
            obs.set_pressure_hpa(p)?;
        }
        if let Some(h) = self.relative_humidity {
            obs.set_relative_humidity(h)?;
        }
        if let Some(w) = self.wavelength_um {
            obs.set_wavelength_um(w)?;
        }
        if let Some(o) = self.utc_offset_hours {
            obs.set_utc_offset(o)?;
        }
        Ok(obs)
    }
}

fn invalid(field: &str, message: String) -> crate::CoordError {
    AstroError::invalid_value(&format!("Observer::{}", field), message).into()
}

fn finite(field: &str, value: f64) -> CoordResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(field, format!("{} is not finite", value)))
    }
}

fn non_negative(field: &str, value: f64) -> CoordResult<f64> {
    if finite(field, value)? < 0.0 {
        return Err(invalid(field, format!("{} is negative", value)));
    }
    Ok(value)
}

fn check_location(longitude: Angle, latitude: Angle) -> CoordResult<()> {
    finite("longitude", longitude.radians())?;
    if !(latitude.radians().abs() <= HALF_PI) {
        return Err(invalid(
            "latitude",
            format!("{} outside [-90, 90] degrees", latitude.degrees()),
        ));
    }
    Ok(())
}
