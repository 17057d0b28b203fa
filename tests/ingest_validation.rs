use polars::df;
use polars::prelude::*;
use tabprep::error::DataError;
use tabprep::ingest::{save_raw_csv, validate_frame};

fn people() -> DataFrame {
    df!(
        "id" => [1i64, 2, 3],
        "name" => ["ada", "bob", "cleo"],
        "score" => [Some(98.5f64), None, Some(75.0)],
    )
    .unwrap()
}

#[test]
fn validate_rejects_empty_frame() {
    let empty = df!("id" => Vec::<i64>::new()).unwrap();
    let err = validate_frame(&empty, &[], false, false).unwrap_err();
    assert!(matches!(err, DataError::EmptyFrame));
}

#[test]
fn validate_names_missing_columns() {
    let err = validate_frame(&people(), &["id", "email"], false, false).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("missing required columns"));
    assert!(msg.contains("email"));
    assert!(!msg.contains("\"id\""));
}

#[test]
fn validate_checks_numeric_and_text_presence() {
    let text_only = df!("name" => ["a", "b"]).unwrap();
    let err = validate_frame(&text_only, &[], true, false).unwrap_err();
    assert!(matches!(err, DataError::NoNumericColumns));

    let numeric_only = df!("x" => [1.0f64, 2.0]).unwrap();
    let err = validate_frame(&numeric_only, &[], false, true).unwrap_err();
    assert!(matches!(err, DataError::NoTextColumns));
}

#[test]
fn validate_happy_path() {
    validate_frame(&people(), &["id", "name"], true, true).unwrap();
}

#[test]
fn save_raw_csv_writes_timestamped_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("data").join("raw");

    let mut df = people();
    let path = save_raw_csv(&mut df, "people", &out_dir).unwrap();

    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with("people_"));
    assert!(file_name.ends_with(".csv"));
    assert!(path.is_file());

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("id,name,score"));
    assert_eq!(written.lines().count(), 4);
}
