#![cfg(feature = "json")]

use travelog_core::prelude::*;

const PROFILE: &str = r#"{
    "username": "traveller",
    "visitedCities": [
        {"name": "Hanoi", "country": "Vietnam", "rating": 4, "beenThere": true},
        {"name": "Hanoi", "country": "VN", "rating": 3, "source": "post"}
    ]
}"#;

#[test]
fn loads_plain_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    std::fs::write(&path, PROFILE).unwrap();

    let records = load_records_from_path(&path).unwrap();
    let summaries = aggregate_cities(&records);
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].average_rating, Some(3.5));
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzipped_json_file() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json.gz");
    let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(PROFILE.as_bytes()).unwrap();
    enc.finish().unwrap();

    let records = load_records_from_path(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].source, Source::Post);
}
