pub const J2000_JD: f64 = 2451545.0;

/// Offset between Julian Date and Modified Julian Date (ERFA's `DJM0`).
pub const MJD_ZERO_POINT: f64 = 2_400_000.5;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const HOURS_PER_DAY: f64 = 24.0;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const MILLIARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-9;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// Two sky positions in the same frame closer than this are considered equal (3 mas).
pub const EQUALITY_TOLERANCE_RAD: f64 = 3.0 * MILLIARCSEC_TO_RAD;

/// Standard sea-level pressure in hPa.
pub const SEA_LEVEL_PRESSURE_HPA: f64 = 1013.25;

/// Standard sea-level temperature in degrees Celsius.
pub const SEA_LEVEL_TEMP_C: f64 = 15.0;

/// Standard sea-level temperature in Kelvin, used by the barometric estimate.
pub const SEA_LEVEL_TEMP_K: f64 = 288.2;

pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Scale height factor (m/K) of the isothermal barometric formula.
pub const BAROMETRIC_SCALE_M_PER_K: f64 = 29.3;

/// Default observing wavelength in micrometers (optical).
pub const DEFAULT_WAVELENGTH_UM: f64 = 0.5;
