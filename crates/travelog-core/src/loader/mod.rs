// crates/travelog-core/src/loader/mod.rs

//! # Record Loader
//!
//! Reads visited-city records from JSON exports. Two shapes are accepted:
//! a bare array of records, or a whole user profile document whose
//! `visitedCities` field holds the array. `.json.gz` files are decompressed
//! transparently when the `compact` feature is on.

use crate::error::{Result, TravelogError};
use crate::model::VisitedCityRecord;
use serde_json::Value;
use std::io::Read;
use std::path::Path;

mod common_io;

pub use common_io::is_gzip;

const PROFILE_FIELD: &str = "visitedCities";

fn records_from_array(items: Vec<Value>) -> Result<Vec<VisitedCityRecord>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|source| TravelogError::InvalidRecord { index, source })
        })
        .collect()
}

/// Parse records from any reader (already decompressed).
///
/// An object must carry a `visitedCities` array; anything else is an
/// [`TravelogError::InvalidDocument`]. A bad entry reports its index and
/// the serde message naming the field.
pub fn load_records_from_reader<R: Read>(reader: R) -> Result<Vec<VisitedCityRecord>> {
    let doc: Value = serde_json::from_reader(reader)?;
    match doc {
        Value::Array(items) => records_from_array(items),
        Value::Object(mut fields) => match fields.remove(PROFILE_FIELD) {
            Some(Value::Array(items)) => records_from_array(items),
            Some(Value::Null) => Ok(Vec::new()),
            Some(other) => Err(TravelogError::InvalidDocument(format!(
                "`{PROFILE_FIELD}` must be an array, found {}",
                json_kind(&other)
            ))),
            None => Err(TravelogError::InvalidDocument(format!(
                "object has no `{PROFILE_FIELD}` field"
            ))),
        },
        other => Err(TravelogError::InvalidDocument(format!(
            "expected a record array or a profile object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Load records from a `.json` (or `.json.gz`) file.
pub fn load_records_from_path(path: impl AsRef<Path>) -> Result<Vec<VisitedCityRecord>> {
    let path = path.as_ref();
    let reader = common_io::open_stream(path)?;
    let records = load_records_from_reader(reader)?;
    tracing::debug!(path = %path.display(), records = records.len(), "loaded visited-city records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TravelogError;
    use crate::model::Source;

    #[test]
    fn reads_bare_array() {
        let json = r#"[{"name":"Paris","country":"FR","rating":4},{"name":"Rome","country":"IT","source":"post"}]"#;
        let records = load_records_from_reader(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].source, Source::Post);
    }

    #[test]
    fn reads_profile_document() {
        let json = r#"{"username":"ana","followers":[],"visitedCities":[{"name":"Lima","country":"Peru","beenThere":true}]}"#;
        let records = load_records_from_reader(json.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].been_there);
    }

    #[test]
    fn profile_with_empty_cities_is_empty() {
        let records =
            load_records_from_reader(r#"{"username":"bo","visitedCities":[]}"#.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn profile_without_cities_is_rejected() {
        let err = load_records_from_reader(r#"{"username":"bo"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, TravelogError::InvalidDocument(_)));
    }

    #[test]
    fn single_record_object_is_rejected() {
        let json = r#"{"name":"Paris","country":"FR","rating":4}"#;
        let err = load_records_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, TravelogError::InvalidDocument(_)));
    }

    #[test]
    fn misspelled_cities_key_is_rejected() {
        let json = r#"{"visited_cities":[{"name":"Paris","country":"FR"}]}"#;
        let err = load_records_from_reader(json.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("visitedCities"));
    }

    #[test]
    fn cities_field_must_be_an_array() {
        let err = load_records_from_reader(r#"{"visitedCities":"Paris"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, TravelogError::InvalidDocument(_)));
    }

    #[test]
    fn bad_entry_reports_index_and_field() {
        let json = r#"[{"name":"Paris","country":"FR","rating":4},{"name":"Rome","country":"IT","rating":"4"}]"#;
        let err = load_records_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, TravelogError::InvalidRecord { index: 1, .. }));
        let msg = err.to_string();
        assert!(msg.starts_with("record 1:"), "{msg}");
        assert!(msg.contains("invalid type: string \"4\""), "{msg}");
    }

    #[test]
    fn bad_profile_entry_reports_index() {
        let json = r#"{"visitedCities":[{"name":"Oslo","country":"NO","beenThere":"yes"}]}"#;
        let err = load_records_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, TravelogError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn scalar_document_is_rejected() {
        let err = load_records_from_reader("42".as_bytes()).unwrap_err();
        assert!(matches!(err, TravelogError::InvalidDocument(_)));
    }

    #[test]
    fn garbage_is_a_json_error() {
        let err = load_records_from_reader("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, TravelogError::Json(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_records_from_path("/no/such/records.json").unwrap_err();
        assert!(matches!(err, TravelogError::NotFound(_)));
    }

    #[test]
    fn gzip_detection_is_by_extension() {
        assert!(is_gzip(Path::new("cities.json.gz")));
        assert!(is_gzip(Path::new("cities.JSON.GZ")));
        assert!(!is_gzip(Path::new("cities.json")));
    }
}
