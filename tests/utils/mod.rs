use grid_forecast::RawObservation;
use std::{fs::File, io::Read, path::PathBuf};

#[allow(unused_macros)] // False alarm
macro_rules! check_summaries {
    ($test_name:ident, $fname:expr, $expected:expr) => {
        #[test]
        fn $test_name() {
            let batch = utils::load_test_file($fname);
            let summaries: Vec<String> = grid_forecast::normalize(batch)
                .iter()
                .map(|snap| snap.summary().to_string())
                .collect();

            let expected: &[&str] = $expected;
            assert_eq!(summaries, expected);
        }
    };
}

pub fn load_test_file(fname: &str) -> Vec<RawObservation> {
    let mut test_path = PathBuf::new();
    test_path.push("tests");
    test_path.push("data");
    test_path.push(fname);
    load_test_json_batch(&test_path)
}

fn load_test_json_batch(location: &PathBuf) -> Vec<RawObservation> {
    let mut f = File::open(location).expect(&format!("Error opening file: {:?}", location));

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .expect(&format!("Error reading file: {:?}", location));

    serde_json::from_str(&contents).expect(&format!("Error parsing file: {:?}", location))
}
