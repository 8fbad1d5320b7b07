//! Reader for `test_data/reports.txt`, shared by the tests and the benches.
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Every case in the data file, keyed by name, each a map of key to raw value.
pub fn load_all_cases() -> HashMap<String, HashMap<String, String>> {
    let mut test_path = PathBuf::new();
    test_path.push("test_data");
    test_path.push("reports.txt");

    load_cases(&test_path)
}

fn load_cases(location: &PathBuf) -> HashMap<String, HashMap<String, String>> {
    let mut f = File::open(location).expect(&format!("Error opening file: {:#?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:#?}", location));

    let mut cases = HashMap::new();
    let mut current: Option<(String, HashMap<String, String>)> = None;

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            if let Some((name, vals)) = current.take() {
                cases.insert(name, vals);
            }
            current = Some((line[1..line.len() - 1].to_owned(), HashMap::new()));
            continue;
        }

        let (name, vals) = current.as_mut().expect("key outside of a case");
        let mut parts = line.splitn(2, '=');
        let key = parts.next().map(str::trim).expect("no key");
        let val = parts
            .next()
            .map(str::trim)
            .unwrap_or_else(|| panic!("no value for {} in {}", key, name));
        vals.insert(key.to_owned(), val.to_owned());
    }

    if let Some((name, vals)) = current.take() {
        cases.insert(name, vals);
    }

    cases
}
