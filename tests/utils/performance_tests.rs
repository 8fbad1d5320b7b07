use std::collections::HashMap;

use super::*;
use density_altitude::{
    atmosphere::pressure_altitude, compute, decode, KochCurve, ModelMode, PerfError,
    PerformanceInputs, SecondaryMetric,
};
use metfor::{Celsius, Feet, Quantity};
use optional::none;
use strum::IntoEnumIterator;

const FIELD_ELEVATION: Feet = Feet(5000.0);

/// Inputs from the report, or `None` after checking the error if there is no temperature.
fn load_inputs(vals: &HashMap<String, String>) -> Option<PerformanceInputs> {
    let metar = decode(get_str(vals, "raw").unwrap());

    match PerformanceInputs::from_metar(&metar.precise, FIELD_ELEVATION) {
        Ok(inputs) => {
            assert!(get_f64(vals, "precise_temp").is_some());
            Some(inputs)
        }
        Err(err) => {
            assert!(get_f64(vals, "precise_temp").is_none());
            assert_eq!(err, PerfError::MissingValue("temperature"));
            None
        }
    }
}

pub fn test_from_decoded_report(vals: &HashMap<String, String>) {
    let inputs = match load_inputs(vals) {
        Some(inputs) => inputs,
        None => return,
    };

    assert_eq!(inputs.validate(), Ok(()));
    assert_eq!(inputs.field_elevation(), FIELD_ELEVATION);
    assert_eq!(inputs.mode(), ModelMode::RuleOfThumb);

    if let Some(inhg) = get_f64(vals, "alt_inhg") {
        let expected = pressure_altitude(FIELD_ELEVATION, inhg);
        assert!(approx_equal(
            inputs.pressure_altitude().unpack(),
            expected.unpack(),
            1.0
        ));
    }

    for mode in ModelMode::iter() {
        let report = compute(&inputs.with_mode(mode));

        assert_eq!(report.mode, mode);
        assert!(report.pressure_altitude.unpack().is_finite());
        assert!(report.density_altitude_rot.unpack().is_finite());
        assert!(report.density_altitude_precise.unpack().is_finite());
        assert!(report.takeoff_pct.is_finite());
        assert!(report.secondary_pct.is_finite());
        assert!(report.takeoff_pct_display() >= 0.0);
        assert!(report.secondary_pct_display() >= 0.0);
    }

    // Moisture makes the air less dense.
    if inputs.dew_point().is_some() {
        let humid = compute(&inputs);
        let dry = compute(&inputs.with_dew_point(none::<Celsius>()));
        assert!(humid.density_altitude_precise.unpack() > dry.density_altitude_precise.unpack());
        assert_eq!(humid.density_altitude_rot, dry.density_altitude_rot);
    }
}

pub fn test_modes_agree(vals: &HashMap<String, String>) {
    let inputs = match load_inputs(vals) {
        Some(inputs) => inputs,
        None => return,
    };

    let rot = compute(&inputs.with_mode(ModelMode::RuleOfThumb));
    let precise = compute(&inputs.with_mode(ModelMode::Precise));
    let legacy = compute(&inputs.with_mode(ModelMode::Legacy));

    // Both density altitudes are always computed, the mode only picks one.
    for report in &[precise, legacy] {
        assert_eq!(report.pressure_altitude, rot.pressure_altitude);
        assert_eq!(report.density_altitude_rot, rot.density_altitude_rot);
        assert_eq!(report.density_altitude_precise, rot.density_altitude_precise);
    }

    assert_eq!(rot.density_altitude(), rot.density_altitude_rot);
    assert_eq!(legacy.density_altitude(), rot.density_altitude_rot);
    assert_eq!(precise.density_altitude(), precise.density_altitude_precise);

    assert_eq!(rot.secondary_metric, SecondaryMetric::RateOfClimb);
    assert_eq!(precise.secondary_metric, SecondaryMetric::RateOfClimb);
    assert_eq!(legacy.secondary_metric, SecondaryMetric::EnginePower);

    // Same density altitude, different slopes.
    assert!(approx_equal(
        rot.takeoff_pct / KochCurve::Modern.takeoff_pct_per_1000ft(),
        legacy.takeoff_pct / KochCurve::Legacy.takeoff_pct_per_1000ft(),
        1.0e-9
    ));
}
