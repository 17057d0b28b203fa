//! Descriptive summary statistics.
//!
//! [`summary_stats`] is the `describe`-plus-groupby step of the workflow: a
//! per-column statistics table covering every column, and optionally the
//! per-group mean of the numeric columns.

use polars::prelude::*;

use crate::error::DataResult;
use crate::frame::{has_column, numeric_column_names, to_float};

/// Compute a descriptive-statistics table and, optionally, per-group means.
///
/// - The first element covers **all** columns: count, null count, and (for
///   numeric columns only) mean, sample std, min, quartiles, and max. Numeric
///   statistics are null for non-numeric columns.
/// - The second element is `Some` only when `group_col` names an existing
///   column and the frame has at least one other numeric column: the mean of
///   each numeric column per group, sorted by group. Otherwise it is `None`
///   (no error is raised).
pub fn summary_stats(
    df: &DataFrame,
    group_col: Option<&str>,
) -> DataResult<(DataFrame, Option<DataFrame>)> {
    let summary = describe_all(df)?;
    let grouped = match group_col {
        Some(group) if has_column(df, group) => grouped_numeric_means(df, group)?,
        _ => None,
    };
    Ok((summary, grouped))
}

fn describe_all(df: &DataFrame) -> DataResult<DataFrame> {
    let height = df.height();
    let width = df.width();

    let mut names = Vec::with_capacity(width);
    let mut dtypes = Vec::with_capacity(width);
    let mut counts: Vec<u32> = Vec::with_capacity(width);
    let mut nulls: Vec<u32> = Vec::with_capacity(width);
    let mut means: Vec<Option<f64>> = Vec::with_capacity(width);
    let mut stds: Vec<Option<f64>> = Vec::with_capacity(width);
    let mut mins: Vec<Option<f64>> = Vec::with_capacity(width);
    let mut q25s: Vec<Option<f64>> = Vec::with_capacity(width);
    let mut medians: Vec<Option<f64>> = Vec::with_capacity(width);
    let mut q75s: Vec<Option<f64>> = Vec::with_capacity(width);
    let mut maxs: Vec<Option<f64>> = Vec::with_capacity(width);

    for column in df.columns() {
        names.push(column.name().to_string());
        dtypes.push(column.dtype().to_string());
        nulls.push(column.null_count() as u32);
        counts.push((height - column.null_count()) as u32);

        if column.dtype().is_primitive_numeric() {
            let ca = to_float(column.as_materialized_series())?;
            means.push(ca.mean());
            stds.push(ca.std(1));
            mins.push(ca.min());
            q25s.push(ca.quantile(0.25, QuantileMethod::Linear)?);
            medians.push(ca.median());
            q75s.push(ca.quantile(0.75, QuantileMethod::Linear)?);
            maxs.push(ca.max());
        } else {
            means.push(None);
            stds.push(None);
            mins.push(None);
            q25s.push(None);
            medians.push(None);
            q75s.push(None);
            maxs.push(None);
        }
    }

    Ok(polars::df!(
        "column" => names,
        "dtype" => dtypes,
        "count" => counts,
        "null_count" => nulls,
        "mean" => means,
        "std" => stds,
        "min" => mins,
        "25%" => q25s,
        "50%" => medians,
        "75%" => q75s,
        "max" => maxs,
    )?)
}

/// Mean of each numeric column per group, or `None` if no numeric column
/// exists besides the grouping column itself.
fn grouped_numeric_means(df: &DataFrame, group: &str) -> DataResult<Option<DataFrame>> {
    let numeric: Vec<String> = numeric_column_names(df)
        .into_iter()
        .filter(|c| c != group)
        .collect();
    if numeric.is_empty() {
        return Ok(None);
    }

    let aggs: Vec<Expr> = numeric.iter().map(|c| col(c.as_str()).mean()).collect();
    let out = df
        .clone()
        .lazy()
        .group_by([col(group)])
        .agg(aggs)
        .sort([group], SortMultipleOptions::default())
        .collect()?;
    Ok(Some(out))
}
