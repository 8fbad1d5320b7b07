use std::collections::HashMap;

#[path = "../tests/utils/data_file.rs"]
mod data_file;

/// Raw text of every report in the test data, keyed by case name.
pub fn load_all_reports() -> HashMap<String, String> {
    data_file::load_all_cases()
        .into_iter()
        .filter_map(|(name, mut vals)| vals.remove("raw").map(|raw| (name, raw)))
        .collect()
}
