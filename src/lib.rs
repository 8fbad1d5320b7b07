#![warn(missing_docs)]
//! Decode METAR reports and estimate the effect of density altitude on aircraft performance.
//!
//! The crate has two independent halves. The [`metar`] module pulls temperature, dew point,
//! altimeter setting, wind, visibility, clouds and weather out of free form report text and
//! classifies the flight category. The [`atmosphere`] and [`koch`] modules compute pressure
//! altitude, density altitude by a rule of thumb or a humidity corrected model, and the Koch chart
//! takeoff distance and climb penalties. The [`performance`] module puts the model together.
//!
//! Nothing here returns an error for bad data. Values that can't be found are missing, and
//! non-finite inputs give non-finite outputs.
//!
//! # Examples
//!
//! ```rust
//! use density_altitude::{compute, decode, FlightCategory, ModelMode, PerformanceInputs};
//! use metfor::Feet;
//!
//! let metar = decode("METAR KSMO 251853Z 25008KT 10SM FEW250 22/12 A3005 RMK AO2 T02220117=");
//! assert_eq!(metar.category, FlightCategory::Vfr);
//!
//! let inputs = PerformanceInputs::from_metar(&metar.precise, Feet(177.0))
//!     .unwrap()
//!     .with_mode(ModelMode::Precise);
//! let report = compute(&inputs);
//!
//! assert!(report.density_altitude().0 > 500.0);
//! assert!(report.takeoff_pct_display() > 0.0);
//! ```

//
// API
//
pub use crate::{
    error::{PerfError, Result},
    koch::{KochCurve, SecondaryMetric},
    metar::{
        decode, flight_category, parse_basic, parse_full, parse_precise, DecodedMetar,
        FlightCategory, ParsedMetarBasic, ParsedMetarFull, ParsedMetarPrecise,
    },
    performance::{
        compute, ModelMode, PerformanceInputs, PerformanceReport, PressureSource,
    },
};

pub mod atmosphere;
pub mod koch;
pub mod metar;
pub mod performance;
pub mod units;

//
// Internal use only
//
mod error;
mod utility;

#[cfg(test)]
mod test_data;
