//! DataFrame helpers shared across the workflow stages.
//!
//! Small utilities for column lookup, numeric-column selection, and the
//! "coerce to numeric, unparseable becomes missing" pattern (a non-strict
//! cast to `Float64`).

use polars::prelude::*;

use crate::error::{DataError, DataResult};

/// Returns true if the frame has a column with the given name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|n| n.as_str() == name)
}

/// Names of all columns with a primitive numeric dtype, in frame order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.columns()
        .iter()
        .filter(|c| c.dtype().is_primitive_numeric())
        .map(|c| c.name().to_string())
        .collect()
}

/// Errors with [`DataError::MissingColumns`] naming every absent column.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> DataResult<()> {
    let missing: Vec<String> = required
        .iter()
        .filter(|c| !has_column(df, c))
        .map(|c| (*c).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DataError::MissingColumns { columns: missing })
    }
}

/// Coerce a series to `Float64`, mapping unparseable values to null.
///
/// Uses a non-strict cast, so a string series like `["1.5", "x"]` becomes
/// `[1.5, null]` rather than an error.
pub fn to_float(series: &Series) -> DataResult<Float64Chunked> {
    let casted = series.cast(&DataType::Float64)?;
    Ok(casted.f64()?.clone())
}
