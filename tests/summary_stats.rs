use polars::df;
use polars::prelude::*;
use tabprep::stats::summary_stats;

fn sample() -> DataFrame {
    df!(
        "group" => ["a", "a", "b"],
        "x" => [1.0f64, 3.0, 5.0],
        "label" => ["u", "v", "w"],
    )
    .unwrap()
}

fn row_index(summary: &DataFrame, name: &str) -> usize {
    summary
        .column("column")
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .iter()
        .position(|v| v == Some(name))
        .unwrap()
}

fn stat(summary: &DataFrame, stat: &str, row: usize) -> Option<f64> {
    summary
        .column(stat)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .get(row)
}

#[test]
fn summary_covers_all_columns() {
    let (summary, _) = summary_stats(&sample(), None).unwrap();
    assert_eq!(summary.height(), 3);

    let x = row_index(&summary, "x");
    assert_eq!(stat(&summary, "mean", x), Some(3.0));
    assert_eq!(stat(&summary, "min", x), Some(1.0));
    assert_eq!(stat(&summary, "max", x), Some(5.0));
    assert_eq!(stat(&summary, "50%", x), Some(3.0));

    // Non-numeric columns keep count/null_count but have null numeric stats.
    let label = row_index(&summary, "label");
    assert_eq!(stat(&summary, "mean", label), None);
    let counts = summary
        .column("count")
        .unwrap()
        .as_materialized_series()
        .u32()
        .unwrap()
        .clone();
    assert_eq!(counts.get(label), Some(3));
}

#[test]
fn summary_counts_nulls() {
    let df = df!("x" => [Some(1.0f64), None, Some(3.0)]).unwrap();
    let (summary, _) = summary_stats(&df, None).unwrap();
    let nulls = summary
        .column("null_count")
        .unwrap()
        .as_materialized_series()
        .u32()
        .unwrap()
        .get(0);
    assert_eq!(nulls, Some(1));
}

#[test]
fn grouped_means_cover_numeric_columns_only() {
    let (_, grouped) = summary_stats(&sample(), Some("group")).unwrap();
    let grouped = grouped.unwrap();

    // Sorted by group: "a" then "b".
    assert_eq!(grouped.height(), 2);
    let means = grouped
        .column("x")
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .clone();
    assert_eq!(means.get(0), Some(2.0));
    assert_eq!(means.get(1), Some(5.0));
    // The text column is not aggregated.
    assert!(grouped.column("label").is_err());
}

#[test]
fn grouped_is_none_for_absent_group_column() {
    let (_, grouped) = summary_stats(&sample(), Some("nope")).unwrap();
    assert!(grouped.is_none());
}

#[test]
fn grouped_is_none_without_numeric_columns() {
    let df = df!(
        "group" => ["a", "b"],
        "label" => ["u", "v"],
    )
    .unwrap();
    let (_, grouped) = summary_stats(&df, Some("group")).unwrap();
    assert!(grouped.is_none());
}
