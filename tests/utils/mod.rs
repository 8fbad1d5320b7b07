use std::collections::HashMap;
use std::str::FromStr;

pub mod data_file;
pub mod field_tests;
pub mod performance_tests;

/// Every key a test case must have.
pub const KEYS: [&str; 15] = [
    "raw",
    "type",
    "time",
    "wind",
    "vis",
    "clouds",
    "wx",
    "temp",
    "dew",
    "precise_temp",
    "precise_dew",
    "alt_inhg",
    "alt_unit",
    "ceiling",
    "category",
];

#[allow(unused_macros)] // False alarm
macro_rules! check_case_complete {
    ($test_name:ident, $case:expr) => {
        #[test]
        fn $test_name() {
            let vals = utils::load_test_case($case);

            // Make sure all of these keys are in the hashmap
            for key in utils::KEYS.iter() {
                assert!(vals.contains_key(*key), "missing key {}", key);
            }

            // Make sure there are no extra keys in there being ignored.
            for key in vals.keys() {
                assert!(
                    utils::KEYS.contains(&key.as_str()),
                    "extra key found: {}",
                    key
                );
            }
        }
    };
}

#[allow(unused_macros)] // False alarm
macro_rules! test_report {
    ($test_mod_name:ident, $case:expr) => {
        mod $test_mod_name {

            use std::collections::HashMap;

            use crate::utils;

            fn load_data() -> HashMap<String, String> {
                utils::load_test_case($case)
            }

            mod fields {
                use super::load_data;
                use crate::utils::field_tests;

                #[test]
                fn report_type_and_time() {
                    let vals = load_data();
                    field_tests::test_report_type_and_time(&vals);
                }

                #[test]
                fn groups() {
                    let vals = load_data();
                    field_tests::test_groups(&vals);
                }

                #[test]
                fn temperatures() {
                    let vals = load_data();
                    field_tests::test_temperatures(&vals);
                }

                #[test]
                fn altimeter() {
                    let vals = load_data();
                    field_tests::test_altimeter(&vals);
                }

                #[test]
                fn ceiling_and_category() {
                    let vals = load_data();
                    field_tests::test_ceiling_and_category(&vals);
                }
            }

            mod performance {
                use super::load_data;
                use crate::utils::performance_tests;

                #[test]
                fn from_decoded_report() {
                    let vals = load_data();
                    performance_tests::test_from_decoded_report(&vals);
                }

                #[test]
                fn modes_agree() {
                    let vals = load_data();
                    performance_tests::test_modes_agree(&vals);
                }
            }
        }
    };
}

pub fn load_test_case(name: &str) -> HashMap<String, String> {
    let mut cases = data_file::load_all_cases();
    cases
        .remove(name)
        .unwrap_or_else(|| panic!("No test case named {}", name))
}

/// Get a string value, `none` is missing.
pub fn get_str<'a>(vals: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    let val = vals.get(key).expect(key).as_str();
    if val == "none" {
        None
    } else {
        Some(val)
    }
}

/// Get a space separated list, `none` is empty.
pub fn get_list<'a>(vals: &'a HashMap<String, String>, key: &str) -> Vec<&'a str> {
    get_str(vals, key)
        .map(|val| val.split_whitespace().collect())
        .unwrap_or_default()
}

/// Get a number, `none` is missing.
pub fn get_f64(vals: &HashMap<String, String>, key: &str) -> Option<f64> {
    get_str(vals, key).map(|val| f64::from_str(val).expect(key))
}

pub fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    assert!(eps > 0.0);

    (val1 - val2).abs() < eps
}
