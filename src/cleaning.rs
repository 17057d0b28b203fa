//! Missing-value handling and rescaling.

use std::str::FromStr;

use polars::prelude::*;

use crate::error::{DataError, DataResult};
use crate::frame::{numeric_column_names, require_columns, to_float};

/// Row-dropping policy for [`drop_missing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropMissing {
    /// Drop a row if any value is null.
    Any,
    /// Drop a row only if every value is null.
    All,
    /// Keep rows with at least this many non-null values.
    MinValid(usize),
}

/// Rescaling method for [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeMethod {
    /// `(x - mean) / population std`; an all-zero column when the std is zero.
    Standard,
    /// `(x - min) / (max - min)`; an all-zero column when the range is zero.
    MinMax,
}

impl FromStr for NormalizeMethod {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "minmax" => Ok(Self::MinMax),
            other => Err(DataError::UnknownMethod {
                method: other.to_string(),
            }),
        }
    }
}

/// Replace nulls in the chosen columns (default: all numeric columns) with
/// that column's median, computed independently per column.
pub fn fill_missing_median(df: &DataFrame, cols: Option<&[&str]>) -> DataResult<DataFrame> {
    let targets = resolve_targets(df, cols)?;

    let mut exprs = Vec::with_capacity(targets.len());
    for name in &targets {
        let ca = to_float(df.column(name)?.as_materialized_series())?;
        // All-null columns have no median and are left untouched.
        if let Some(median) = ca.median() {
            exprs.push(col(name.as_str()).fill_null(lit(median)));
        }
    }
    if exprs.is_empty() {
        return Ok(df.clone());
    }
    Ok(df.clone().lazy().with_columns(exprs).collect()?)
}

/// Drop rows according to a [`DropMissing`] policy.
pub fn drop_missing(df: &DataFrame, how: DropMissing) -> DataResult<DataFrame> {
    let min_valid = match how {
        DropMissing::Any => df.width(),
        DropMissing::All => 1,
        DropMissing::MinValid(n) => n,
    };

    let mut valid = vec![0usize; df.height()];
    for column in df.columns() {
        for (i, is_null) in column
            .as_materialized_series()
            .is_null()
            .into_iter()
            .enumerate()
        {
            if !matches!(is_null, Some(true)) {
                valid[i] += 1;
            }
        }
    }

    let keep: Vec<bool> = valid.iter().map(|&n| n >= min_valid).collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Rescale the chosen columns (default: all numeric columns) with the given
/// method. Column shape is preserved: degenerate inputs (zero variance, zero
/// range, or all-null) produce a zero-filled column rather than an error.
pub fn normalize(
    df: &DataFrame,
    cols: Option<&[&str]>,
    method: NormalizeMethod,
) -> DataResult<DataFrame> {
    let targets = resolve_targets(df, cols)?;

    let mut exprs = Vec::with_capacity(targets.len());
    for name in &targets {
        let ca = to_float(df.column(name)?.as_materialized_series())?;
        let expr = match method {
            NormalizeMethod::Standard => match (ca.mean(), ca.std(0)) {
                (Some(mean), Some(std)) if std != 0.0 => {
                    (col(name.as_str()) - lit(mean)) / lit(std)
                }
                _ => lit(0.0),
            },
            NormalizeMethod::MinMax => match (ca.min(), ca.max()) {
                (Some(min), Some(max)) if max - min != 0.0 => {
                    (col(name.as_str()) - lit(min)) / lit(max - min)
                }
                _ => lit(0.0),
            },
        };
        exprs.push(expr.alias(name.as_str()));
    }
    if exprs.is_empty() {
        return Ok(df.clone());
    }
    Ok(df.clone().lazy().with_columns(exprs).collect()?)
}

/// Explicit columns must exist; `None` means every numeric column.
fn resolve_targets(df: &DataFrame, cols: Option<&[&str]>) -> DataResult<Vec<String>> {
    match cols {
        Some(names) => {
            require_columns(df, names)?;
            Ok(names.iter().map(|c| (*c).to_string()).collect())
        }
        None => Ok(numeric_column_names(df)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_method_parses_known_names() {
        assert_eq!(
            "standard".parse::<NormalizeMethod>().unwrap(),
            NormalizeMethod::Standard
        );
        assert_eq!(
            "minmax".parse::<NormalizeMethod>().unwrap(),
            NormalizeMethod::MinMax
        );
    }

    #[test]
    fn normalize_method_rejects_unknown_names() {
        let err = "robust".parse::<NormalizeMethod>().unwrap_err();
        assert!(err.to_string().contains("unknown method 'robust'"));
    }
}
