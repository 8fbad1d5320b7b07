//! Putting the atmosphere model and the Koch curves together.
//!
//! Build a [`PerformanceInputs`] from manually entered values or a decoded report, then call
//! [`compute`] to get every figure at once. Both density altitudes are always computed, the
//! [`ModelMode`] decides which one the percentages are based on and which Koch curve is used.
use crate::{
    atmosphere::{
        density_altitude_precise, density_altitude_rule_of_thumb, pressure_altitude,
        STANDARD_ALTIMETER_INHG,
    },
    error::{PerfError, Result},
    koch::{
        display_percent, secondary_decrease, takeoff_distance_increase, KochCurve,
        SecondaryMetric,
    },
    metar::ParsedMetarPrecise,
};
use metfor::{Celsius, Feet, Quantity};
use optional::Optioned;
use std::{fmt::Display, str::FromStr};
use strum_macros::EnumIter;

/// Which density altitude and Koch curve to base the percentages on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ModelMode {
    /// Rule of thumb density altitude with the modern curve.
    RuleOfThumb,
    /// Humidity corrected density altitude with the modern curve.
    Precise,
    /// Rule of thumb density altitude with the legacy curve.
    Legacy,
}

impl ModelMode {
    /// The Koch curve used in this mode.
    pub fn curve(self) -> KochCurve {
        match self {
            ModelMode::RuleOfThumb | ModelMode::Precise => KochCurve::Modern,
            ModelMode::Legacy => KochCurve::Legacy,
        }
    }

    /// Short name, `rot`, `precise`, or `legacy`.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelMode::RuleOfThumb => "rot",
            ModelMode::Precise => "precise",
            ModelMode::Legacy => "legacy",
        }
    }
}

impl Default for ModelMode {
    fn default() -> Self {
        ModelMode::RuleOfThumb
    }
}

impl Display for ModelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModelMode {
    type Err = PerfError;

    fn from_str(s: &str) -> Result<Self> {
        use strum::IntoEnumIterator;

        let name = s.trim();
        ModelMode::iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| PerfError::UnknownMode(name.to_owned()))
    }
}

/// Where the pressure altitude comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressureSource {
    /// Altimeter setting in inches of mercury, combined with the field elevation.
    Altimeter(f64),
    /// Pressure altitude entered directly, the field elevation is not used for it.
    PressureAltitude(Feet),
}

/// Inputs for [`compute`].
#[derive(Debug, Clone, Copy)]
pub struct PerformanceInputs {
    field_elevation: Feet,
    temperature: Celsius,
    dew_point: Optioned<Celsius>,
    pressure: PressureSource,
    mode: ModelMode,
}

impl PartialEq for PerformanceInputs {
    fn eq(&self, other: &Self) -> bool {
        self.field_elevation == other.field_elevation
            && self.temperature == other.temperature
            && self.dew_point.into_option() == other.dew_point.into_option()
            && self.pressure == other.pressure
            && self.mode == other.mode
    }
}

impl PerformanceInputs {
    /// Inputs with a standard altimeter setting, no dew point, and the rule of thumb mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use density_altitude::{compute, ModelMode, PerformanceInputs};
    /// use metfor::{Celsius, Feet};
    ///
    /// let inputs = PerformanceInputs::new(Feet(5000.0), Celsius(30.0))
    ///     .with_altimeter(30.02)
    ///     .with_dew_point(Celsius(10.0))
    ///     .with_mode(ModelMode::Precise);
    ///
    /// let report = compute(&inputs);
    /// assert!((report.pressure_altitude.0 - 4900.0).abs() < 1.0e-6);
    /// assert_eq!(report.density_altitude(), report.density_altitude_precise);
    /// ```
    pub fn new(field_elevation: Feet, temperature: Celsius) -> Self {
        PerformanceInputs {
            field_elevation,
            temperature,
            dew_point: Optioned::default(),
            pressure: PressureSource::Altimeter(STANDARD_ALTIMETER_INHG),
            mode: ModelMode::default(),
        }
    }

    /// Set inputs from a decoded report. The temperature is required, the dew point and altimeter
    /// setting are used if present.
    pub fn from_metar(metar: &ParsedMetarPrecise, field_elevation: Feet) -> Result<Self> {
        let temperature = metar
            .temperature
            .into_option()
            .ok_or(PerfError::MissingValue("temperature"))?;

        let mut inputs = PerformanceInputs::new(field_elevation, temperature)
            .with_dew_point(metar.dew_point);
        if let Some(inhg) = metar.altimeter_inhg.into_option() {
            inputs = inputs.with_altimeter(inhg);
        }

        Ok(inputs)
    }

    /// Builder method for the dew point.
    pub fn with_dew_point<T>(self, dew_point: T) -> Self
    where
        Optioned<Celsius>: From<T>,
    {
        PerformanceInputs {
            dew_point: Optioned::from(dew_point),
            ..self
        }
    }

    /// Builder method for the altimeter setting in inches of mercury.
    pub fn with_altimeter(self, altimeter_inhg: f64) -> Self {
        PerformanceInputs {
            pressure: PressureSource::Altimeter(altimeter_inhg),
            ..self
        }
    }

    /// Builder method to override the pressure altitude.
    pub fn with_pressure_altitude(self, pressure_altitude: Feet) -> Self {
        PerformanceInputs {
            pressure: PressureSource::PressureAltitude(pressure_altitude),
            ..self
        }
    }

    /// Builder method for the model mode.
    pub fn with_mode(self, mode: ModelMode) -> Self {
        PerformanceInputs { mode, ..self }
    }

    /// Field elevation.
    pub fn field_elevation(&self) -> Feet {
        self.field_elevation
    }

    /// Outside air temperature.
    pub fn temperature(&self) -> Celsius {
        self.temperature
    }

    /// Dew point, if any.
    pub fn dew_point(&self) -> Optioned<Celsius> {
        self.dew_point
    }

    /// Where the pressure altitude comes from.
    pub fn pressure_source(&self) -> PressureSource {
        self.pressure
    }

    /// Model mode.
    pub fn mode(&self) -> ModelMode {
        self.mode
    }

    /// Pressure altitude from the altimeter setting, or the override.
    pub fn pressure_altitude(&self) -> Feet {
        match self.pressure {
            PressureSource::Altimeter(inhg) => pressure_altitude(self.field_elevation, inhg),
            PressureSource::PressureAltitude(pa) => pa,
        }
    }

    /// Check that every supplied number is finite. [`compute`] does not check.
    pub fn validate(&self) -> Result<()> {
        fn finite(val: f64, name: &'static str) -> Result<()> {
            if val.is_finite() {
                Ok(())
            } else {
                Err(PerfError::NonFinite(name))
            }
        }

        finite(self.field_elevation.unpack(), "field elevation")?;
        finite(self.temperature.unpack(), "temperature")?;
        if let Some(td) = self.dew_point.into_option() {
            finite(td.unpack(), "dew point")?;
        }
        match self.pressure {
            PressureSource::Altimeter(inhg) => finite(inhg, "altimeter setting"),
            PressureSource::PressureAltitude(pa) => finite(pa.unpack(), "pressure altitude"),
        }
    }
}

/// Every figure computed from a set of inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceReport {
    /// Mode the percentages were computed with.
    pub mode: ModelMode,
    /// Pressure altitude.
    pub pressure_altitude: Feet,
    /// Rule of thumb density altitude.
    pub density_altitude_rot: Feet,
    /// Humidity corrected density altitude.
    pub density_altitude_precise: Feet,
    /// Raw takeoff distance increase in percent.
    pub takeoff_pct: f64,
    /// Raw secondary decrease in percent, see `secondary_metric`.
    pub secondary_pct: f64,
    /// What `secondary_pct` describes.
    pub secondary_metric: SecondaryMetric,
}

impl PerformanceReport {
    /// The density altitude the percentages are based on.
    pub fn density_altitude(&self) -> Feet {
        match self.mode {
            ModelMode::Precise => self.density_altitude_precise,
            ModelMode::RuleOfThumb | ModelMode::Legacy => self.density_altitude_rot,
        }
    }

    /// Takeoff distance increase floored at zero.
    pub fn takeoff_pct_display(&self) -> f64 {
        display_percent(self.takeoff_pct)
    }

    /// Secondary decrease floored at zero.
    pub fn secondary_pct_display(&self) -> f64 {
        display_percent(self.secondary_pct)
    }
}

impl Display for PerformanceReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] PA {:.0} ft, DA {:.0} ft (rot {:.0} ft, precise {:.0} ft), \
             takeoff +{:.0}%, {} {:.0}%",
            self.mode,
            self.pressure_altitude.unpack(),
            self.density_altitude().unpack(),
            self.density_altitude_rot.unpack(),
            self.density_altitude_precise.unpack(),
            self.takeoff_pct_display(),
            self.secondary_metric,
            self.secondary_pct_display(),
        )
    }
}

/// Compute pressure altitude, both density altitudes, and the Koch percentages.
///
/// Inputs are not validated, see [`PerformanceInputs::validate`].
pub fn compute(inputs: &PerformanceInputs) -> PerformanceReport {
    let pa = inputs.pressure_altitude();
    let da_rot = density_altitude_rule_of_thumb(pa, inputs.temperature, inputs.field_elevation);
    let da_precise = density_altitude_precise(pa, inputs.temperature, inputs.dew_point);

    let mode = inputs.mode;
    let curve = mode.curve();
    let da = match mode {
        ModelMode::Precise => da_precise,
        ModelMode::RuleOfThumb | ModelMode::Legacy => da_rot,
    };

    let report = PerformanceReport {
        mode,
        pressure_altitude: pa,
        density_altitude_rot: da_rot,
        density_altitude_precise: da_precise,
        takeoff_pct: takeoff_distance_increase(da, curve),
        secondary_pct: secondary_decrease(da, curve),
        secondary_metric: curve.secondary_metric(),
    };

    log::debug!("{}", report);

    report
}
