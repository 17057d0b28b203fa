//! Intake validation.

use polars::prelude::*;

use crate::error::{DataError, DataResult};
use crate::frame::{numeric_column_names, require_columns};

/// Minimal validation gate for freshly acquired frames:
///
/// 1. the frame must have at least one row
/// 2. every column in `required_cols` must be present (the error names all
///    missing columns)
/// 3. optionally, at least one numeric and/or one non-numeric column must exist
///
/// On success, logs the frame shape and per-column null counts and returns
/// `Ok(())`.
pub fn validate_frame(
    df: &DataFrame,
    required_cols: &[&str],
    need_numeric: bool,
    need_text: bool,
) -> DataResult<()> {
    if df.height() == 0 {
        return Err(DataError::EmptyFrame);
    }
    require_columns(df, required_cols)?;

    if need_numeric && numeric_column_names(df).is_empty() {
        return Err(DataError::NoNumericColumns);
    }
    if need_text
        && df
            .columns()
            .iter()
            .all(|c| c.dtype().is_primitive_numeric())
    {
        return Err(DataError::NoTextColumns);
    }

    tracing::info!(rows = df.height(), columns = df.width(), "frame validated");
    for column in df.columns() {
        tracing::info!(
            column = %column.name(),
            nulls = column.null_count(),
            "missing-value count"
        );
    }
    Ok(())
}
