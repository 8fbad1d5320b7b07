//! Unit conversions used by the performance calculations and the METAR decoder.
//!
//! Altimeter settings are carried as plain `f64` values in inches of mercury, everything else
//! uses the `metfor` newtypes. All conversions are exact affine transforms.
use metfor::{Celsius, Fahrenheit, Feet, HectoPascal, Kelvin, Meters, Quantity};

/// Hectopascals in one inch of mercury.
pub const HPA_PER_INHG: f64 = 33.8638866667;

/// Meters in one foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Convert a temperature in Celsius to Fahrenheit.
///
/// ```rust
/// use density_altitude::units::celsius_to_fahrenheit;
/// use metfor::{Celsius, Fahrenheit};
///
/// assert_eq!(celsius_to_fahrenheit(Celsius(100.0)), Fahrenheit(212.0));
/// ```
#[inline]
pub fn celsius_to_fahrenheit(t: Celsius) -> Fahrenheit {
    Fahrenheit(t.unpack() * 9.0 / 5.0 + 32.0)
}

/// Convert a temperature in Fahrenheit to Celsius.
#[inline]
pub fn fahrenheit_to_celsius(t: Fahrenheit) -> Celsius {
    Celsius((t.unpack() - 32.0) * 5.0 / 9.0)
}

/// Convert a temperature in Celsius to Kelvin.
#[inline]
pub fn celsius_to_kelvin(t: Celsius) -> Kelvin {
    Kelvin(t.unpack() + KELVIN_OFFSET)
}

/// Convert an altimeter setting in inches of mercury to hectopascals.
///
/// ```rust
/// use density_altitude::units::inhg_to_hpa;
///
/// let qnh = inhg_to_hpa(29.92);
/// assert!((qnh.0 - 1013.21).abs() < 0.01);
/// ```
#[inline]
pub fn inhg_to_hpa(inhg: f64) -> HectoPascal {
    HectoPascal(inhg * HPA_PER_INHG)
}

/// Convert a pressure in hectopascals to inches of mercury.
#[inline]
pub fn hpa_to_inhg(p: HectoPascal) -> f64 {
    p.unpack() / HPA_PER_INHG
}

/// Convert feet to meters.
#[inline]
pub fn feet_to_meters(len: Feet) -> Meters {
    Meters(len.unpack() * METERS_PER_FOOT)
}

/// Convert meters to feet.
#[inline]
pub fn meters_to_feet(len: Meters) -> Feet {
    Feet(len.unpack() / METERS_PER_FOOT)
}
