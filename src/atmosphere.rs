//! Pressure altitude, the standard atmosphere, and density altitude.
//!
//! Two density altitude formulations are provided. The rule of thumb is the classic linear
//! correction of 120 ft per degree Celsius of deviation from ISA and ignores humidity. The precise
//! model computes the air density from the standard pressure at the pressure altitude and the
//! virtual temperature, then finds the altitude with that density in the standard atmosphere.
//!
//! None of these functions validate their inputs. Non-finite inputs produce non-finite outputs.
use crate::units::{celsius_to_kelvin, feet_to_meters, meters_to_feet};
use metfor::{Celsius, Feet, HectoPascal, Meters, Quantity};
use optional::Optioned;

/// Standard altimeter setting in inches of mercury.
pub const STANDARD_ALTIMETER_INHG: f64 = 29.92;

/// Standard sea level pressure.
pub const STANDARD_PRESSURE: HectoPascal = HectoPascal(1013.25);

/// Standard sea level temperature.
pub const ISA_SEA_LEVEL_TEMPERATURE: Celsius = Celsius(15.0);

/// ISA temperature lapse used by the rule of thumb, degrees Celsius per 1000 ft.
pub const ISA_LAPSE_RATE_C_PER_1000FT: f64 = 1.98;

/// Density altitude change per degree Celsius of deviation from ISA for the rule of thumb.
pub const RULE_OF_THUMB_FT_PER_C: f64 = 120.0;

// Standard atmosphere constants for the troposphere.
const T0: f64 = 288.15; // K
const LAPSE_RATE: f64 = 0.0065; // K/m
const BAROMETRIC_EXPONENT: f64 = 5.25588; // g M / (R L)
const RHO0: f64 = 1.225; // kg/m^3
const RD: f64 = 287.05; // J/(kg K)
const EPSILON: f64 = 0.622;
const MAX_MIXING_RATIO: f64 = 0.1; // kg/kg

/// Pressure altitude from field elevation and altimeter setting.
///
/// `(29.92 - altimeter) * 1000 + elevation`, no clamping.
///
/// ```rust
/// use density_altitude::atmosphere::pressure_altitude;
/// use metfor::Feet;
///
/// let pa = pressure_altitude(Feet(5000.0), 30.12);
/// assert!((pa.0 - 4800.0).abs() < 1.0e-9);
/// ```
#[inline]
pub fn pressure_altitude(field_elevation: Feet, altimeter_inhg: f64) -> Feet {
    Feet((STANDARD_ALTIMETER_INHG - altimeter_inhg) * 1000.0 + field_elevation.unpack())
}

/// Approximate ISA temperature at an elevation.
#[inline]
pub fn isa_temperature(elevation: Feet) -> Celsius {
    Celsius(
        ISA_SEA_LEVEL_TEMPERATURE.unpack()
            - ISA_LAPSE_RATE_C_PER_1000FT * (elevation.unpack() / 1000.0),
    )
}

/// Rule of thumb density altitude.
///
/// The ISA temperature is taken at the field elevation, not the pressure altitude.
///
/// ```rust
/// use density_altitude::atmosphere::density_altitude_rule_of_thumb;
/// use metfor::{Celsius, Feet};
///
/// let da = density_altitude_rule_of_thumb(Feet(2000.0), Celsius(30.0), Feet(2000.0));
/// assert!((da.0 - 4275.2).abs() < 1.0e-9);
/// ```
#[inline]
pub fn density_altitude_rule_of_thumb(
    pressure_altitude: Feet,
    temperature: Celsius,
    field_elevation: Feet,
) -> Feet {
    let deviation = temperature.unpack() - isa_temperature(field_elevation).unpack();
    Feet(pressure_altitude.unpack() + RULE_OF_THUMB_FT_PER_C * deviation)
}

/// Humidity corrected density altitude.
///
/// If `dew_point` is missing the air is treated as dry and the virtual temperature is the air
/// temperature. A NaN dew point counts as missing, that is how `Optioned` stores it.
///
/// ```rust
/// use density_altitude::atmosphere::density_altitude_precise;
/// use metfor::{Celsius, Feet};
/// use optional::none;
///
/// let dry = density_altitude_precise(Feet(5000.0), Celsius(30.0), none::<Celsius>());
/// let humid = density_altitude_precise(Feet(5000.0), Celsius(30.0), Celsius(25.0));
///
/// // Moist air is less dense.
/// assert!(humid.0 > dry.0);
/// ```
pub fn density_altitude_precise<T>(
    pressure_altitude: Feet,
    temperature: Celsius,
    dew_point: T,
) -> Feet
where
    Optioned<Celsius>: From<T>,
{
    let dew_point: Optioned<Celsius> = Optioned::from(dew_point);

    let h = feet_to_meters(pressure_altitude).unpack();
    let p = standard_pressure_at(Meters(h)).unpack();
    let t = celsius_to_kelvin(temperature).unpack();

    let tv = match dew_point.into_option() {
        Some(td) => {
            let r = mixing_ratio(HectoPascal(p), td);
            t * (1.0 + r / EPSILON) / (1.0 + r)
        }
        None => t,
    };

    // p is in hPa
    let rho = p * 100.0 / (RD * tv);

    let h = T0 / LAPSE_RATE * (1.0 - (rho / RHO0).powf(1.0 / (BAROMETRIC_EXPONENT - 1.0)));

    meters_to_feet(Meters(h))
}

/// Pressure at a geopotential height in the standard atmosphere.
pub fn standard_pressure_at(height: Meters) -> HectoPascal {
    let h = height.unpack();
    let ratio = 1.0 - LAPSE_RATE * h / T0;
    HectoPascal(STANDARD_PRESSURE.unpack() * ratio.powf(BAROMETRIC_EXPONENT))
}

/// Saturation vapor pressure over liquid water by the Magnus approximation.
#[inline]
pub fn vapor_pressure(dew_point: Celsius) -> HectoPascal {
    let td = dew_point.unpack();
    HectoPascal(6.112 * (17.67 * td / (td + 243.5)).exp())
}

// Mixing ratio in kg/kg, clamped to keep implausible dew points from blowing up the density.
fn mixing_ratio(pressure: HectoPascal, dew_point: Celsius) -> f64 {
    let e = vapor_pressure(dew_point).unpack();
    let r = EPSILON * e / (pressure.unpack() - e);
    if r.is_nan() {
        r
    } else {
        r.max(0.0).min(MAX_MIXING_RATIO)
    }
}
