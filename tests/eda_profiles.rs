use polars::df;
use polars::prelude::*;
use tabprep::eda::{numeric_profile, save_histogram, structure_and_missing};

#[test]
fn structure_report_counts_missing_per_column() {
    let df = df!(
        "x" => [Some(1.0f64), None, Some(3.0), Some(4.0)],
        "label" => ["a", "b", "c", "d"],
    )
    .unwrap();

    let report = structure_and_missing(&df).unwrap();
    assert_eq!(report.height(), 2);

    let missing = report
        .column("missing")
        .unwrap()
        .as_materialized_series()
        .u32()
        .unwrap()
        .clone();
    assert_eq!(missing.get(0), Some(1));
    assert_eq!(missing.get(1), Some(0));

    let pct = report
        .column("missing_pct")
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .clone();
    assert_eq!(pct.get(0), Some(25.0));

    let dtypes = report
        .column("dtype")
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .clone();
    assert!(dtypes.get(0).is_some_and(|s| !s.is_empty()));
}

#[test]
fn numeric_profile_reports_standard_stats() {
    let df = df!(
        "x" => [1.0f64, 2.0, 3.0, 4.0],
        "label" => ["a", "b", "c", "d"],
    )
    .unwrap();

    let profile = numeric_profile(&df, None).unwrap();
    // Only the numeric column is profiled.
    assert_eq!(profile.height(), 1);

    let get = |name: &str| {
        profile
            .column(name)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .get(0)
    };
    assert_eq!(get("mean"), Some(2.5));
    assert_eq!(get("min"), Some(1.0));
    assert_eq!(get("max"), Some(4.0));
    // Sample std of [1,2,3,4].
    let std = get("std").unwrap();
    assert!((std - 1.2909944487358056).abs() < 1e-9);
    // Symmetric data: skew near zero.
    let skew = get("skew").unwrap();
    assert!(skew.abs() < 1e-9);
    assert!(profile.column("kurtosis").is_ok());
}

#[test]
fn numeric_profile_respects_column_subset() {
    let df = df!(
        "x" => [1.0f64, 2.0],
        "y" => [10.0f64, 20.0],
    )
    .unwrap();

    let profile = numeric_profile(&df, Some(&["y"])).unwrap();
    assert_eq!(profile.height(), 1);
    let name = profile
        .column("column")
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .get(0);
    assert_eq!(name, Some("y"));
}

#[test]
fn numeric_profile_errors_on_absent_subset_column() {
    let df = df!("x" => [1.0f64]).unwrap();
    let err = numeric_profile(&df, Some(&["nope"])).unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn histogram_writes_figure_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("figs").join("hist.png");

    let s = Series::new("v".into(), (1..=50).map(f64::from).collect::<Vec<_>>());
    save_histogram(&s, 10, &path).unwrap();

    let meta = std::fs::metadata(&path).unwrap();
    assert!(meta.len() > 0);
}

#[test]
fn histogram_rejects_all_null_input() {
    let dir = tempfile::tempdir().unwrap();
    let s = Series::new("v".into(), [None::<f64>, None]);
    let err = save_histogram(&s, 10, dir.path().join("h.png")).unwrap_err();
    assert!(err.to_string().contains("figure error"));
}
