use std::collections::HashMap;

use super::*;
use density_altitude::decode;
use metfor::{Celsius, Feet, Quantity};
use optional::Optioned;

fn check_temperature(expected: Option<f64>, found: Optioned<Celsius>, what: &str) {
    match expected {
        Some(val) => {
            let found = found
                .into_option()
                .unwrap_or_else(|| panic!("{} is missing", what));
            assert!(
                approx_equal(val, found.unpack(), 1.0e-9),
                "{}: {} != {}",
                what,
                val,
                found.unpack()
            );
        }
        None => assert!(found.is_none(), "{} should be missing", what),
    }
}

pub fn test_report_type_and_time(vals: &HashMap<String, String>) {
    let metar = decode(get_str(vals, "raw").unwrap());

    assert_eq!(metar.full.report_type.as_deref(), get_str(vals, "type"));
    assert_eq!(metar.full.time.as_deref(), get_str(vals, "time"));

    // Anything reported as a time group parses into its parts.
    if metar.full.time.is_some() {
        let time = metar.full.observation_time().unwrap();
        assert!(time.day >= 1 && time.day <= 31);
        assert!(time.hour < 24);
        assert!(time.minute < 60);
    }
}

pub fn test_groups(vals: &HashMap<String, String>) {
    let metar = decode(get_str(vals, "raw").unwrap());

    assert_eq!(metar.full.wind.as_deref(), get_str(vals, "wind"));
    assert_eq!(metar.full.visibility.as_deref(), get_str(vals, "vis"));
    assert_eq!(metar.full.clouds, get_list(vals, "clouds"));
    assert_eq!(metar.full.weather, get_list(vals, "wx"));

    // The structured views agree with the raw text.
    assert_eq!(metar.full.wind_group().is_some(), metar.full.wind.is_some());
    assert_eq!(
        metar.full.visibility_group().is_some(),
        metar.full.visibility.is_some()
    );
    assert_eq!(metar.full.cloud_layers().len(), metar.full.clouds.len());
}

pub fn test_temperatures(vals: &HashMap<String, String>) {
    let metar = decode(get_str(vals, "raw").unwrap());

    check_temperature(get_f64(vals, "temp"), metar.full.temperature, "temperature");
    check_temperature(get_f64(vals, "dew"), metar.full.dew_point, "dew point");
    check_temperature(
        get_f64(vals, "precise_temp"),
        metar.precise.temperature,
        "precise temperature",
    );
    check_temperature(
        get_f64(vals, "precise_dew"),
        metar.precise.dew_point,
        "precise dew point",
    );
}

pub fn test_altimeter(vals: &HashMap<String, String>) {
    let metar = decode(get_str(vals, "raw").unwrap());

    match get_f64(vals, "alt_inhg") {
        Some(expected) => {
            let found = metar.precise.altimeter_inhg.unwrap();
            assert!(
                approx_equal(expected, found, 1.0e-3),
                "{} != {}",
                expected,
                found
            );
            assert!(approx_equal(
                metar.full.altimeter_inhg.unwrap(),
                found,
                1.0e-12
            ));
            assert!(metar.precise.altimeter_hpa.is_some());
        }
        None => {
            assert!(metar.precise.altimeter_inhg.is_none());
            assert!(metar.precise.altimeter_hpa.is_none());
        }
    }

    let unit = metar.precise.altimeter_unit.map(|unit| unit.to_string());
    assert_eq!(unit.as_deref(), get_str(vals, "alt_unit"));
}

pub fn test_ceiling_and_category(vals: &HashMap<String, String>) {
    let metar = decode(get_str(vals, "raw").unwrap());

    let expected_ceiling = get_f64(vals, "ceiling").map(Feet);
    assert_eq!(metar.full.ceiling().into_option(), expected_ceiling);

    assert_eq!(metar.category.to_string(), get_str(vals, "category").unwrap());
    assert_eq!(metar.category, metar.full.flight_category());
}
