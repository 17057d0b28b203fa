//! Exploratory data analysis: structural profiling and figure output.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use polars::prelude::*;

use crate::error::{DataError, DataResult};
use crate::frame::{numeric_column_names, require_columns, to_float};

/// Fixed render size for saved figures: 8x6 inches at 150 DPI.
pub const FIG_SIZE: (u32, u32) = (1200, 900);

/// Per-column structure report: dtype, null count, and null percentage
/// (rounded to two decimals).
pub fn structure_and_missing(df: &DataFrame) -> DataResult<DataFrame> {
    let height = df.height();

    let mut names = Vec::with_capacity(df.width());
    let mut dtypes = Vec::with_capacity(df.width());
    let mut missing: Vec<u32> = Vec::with_capacity(df.width());
    let mut missing_pct: Vec<f64> = Vec::with_capacity(df.width());

    for column in df.columns() {
        let nulls = column.null_count();
        names.push(column.name().to_string());
        dtypes.push(column.dtype().to_string());
        missing.push(nulls as u32);
        let pct = if height == 0 {
            0.0
        } else {
            nulls as f64 / height as f64 * 100.0
        };
        missing_pct.push((pct * 100.0).round() / 100.0);
    }

    Ok(polars::df!(
        "column" => names,
        "dtype" => dtypes,
        "missing" => missing,
        "missing_pct" => missing_pct,
    )?)
}

/// Descriptive statistics for numeric columns, one row per column: count,
/// mean, sample std, min, quartiles, max, plus skewness and kurtosis
/// (bias-corrected, Fisher definition).
///
/// With `cols`, only the named columns are considered (they must exist);
/// non-numeric columns are silently skipped either way.
pub fn numeric_profile(df: &DataFrame, cols: Option<&[&str]>) -> DataResult<DataFrame> {
    let targets: Vec<String> = match cols {
        Some(names) => {
            require_columns(df, names)?;
            names
                .iter()
                .filter(|name| {
                    df.column(name)
                        .map(|c| c.dtype().is_primitive_numeric())
                        .unwrap_or(false)
                })
                .map(|name| (*name).to_string())
                .collect()
        }
        None => numeric_column_names(df),
    };

    let n = targets.len();
    let mut counts: Vec<u32> = Vec::with_capacity(n);
    let mut means = Vec::with_capacity(n);
    let mut stds = Vec::with_capacity(n);
    let mut mins = Vec::with_capacity(n);
    let mut q25s = Vec::with_capacity(n);
    let mut medians = Vec::with_capacity(n);
    let mut q75s = Vec::with_capacity(n);
    let mut maxs = Vec::with_capacity(n);
    let mut skews = Vec::with_capacity(n);
    let mut kurtoses = Vec::with_capacity(n);

    for name in &targets {
        let series = df.column(name)?.as_materialized_series();
        let ca = to_float(series)?;
        let floats = ca.clone().into_series();

        counts.push((series.len() - series.null_count()) as u32);
        means.push(ca.mean());
        stds.push(ca.std(1));
        mins.push(ca.min());
        q25s.push(ca.quantile(0.25, QuantileMethod::Linear)?);
        medians.push(ca.median());
        q75s.push(ca.quantile(0.75, QuantileMethod::Linear)?);
        maxs.push(ca.max());
        skews.push(floats.skew(false)?);
        kurtoses.push(floats.kurtosis(true, false)?);
    }

    Ok(polars::df!(
        "column" => targets,
        "count" => counts,
        "mean" => means,
        "std" => stds,
        "min" => mins,
        "25%" => q25s,
        "50%" => medians,
        "75%" => q75s,
        "max" => maxs,
        "skew" => skews,
        "kurtosis" => kurtoses,
    )?)
}

/// Render a figure to `path` at [`FIG_SIZE`].
///
/// Creates missing parent directories, hands the drawing area to `draw`, and
/// finalizes the backend (which writes the file and releases the resource).
pub fn save_fig<'a, F>(path: &'a Path, draw: F) -> DataResult<()>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'a>, Shift>) -> Result<(), String>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(path, FIG_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| DataError::Figure {
        message: e.to_string(),
    })?;
    draw(&root).map_err(|message| DataError::Figure { message })?;
    root.present().map_err(|e| DataError::Figure {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Bin a numeric series and save a bar-chart histogram via [`save_fig`].
pub fn save_histogram(series: &Series, bins: usize, path: impl AsRef<Path>) -> DataResult<()> {
    let path = path.as_ref();
    let ca = to_float(series)?;
    let values: Vec<f64> = ca.iter().flatten().collect();
    if values.is_empty() {
        return Err(DataError::Figure {
            message: format!("no numeric values in '{}'", series.name()),
        });
    }

    let bins = bins.max(1);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        max = min + 1.0;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in &values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(1).max(1);

    save_fig(path, move |root| {
        let (w, h) = root.dim_in_pixel();
        let margin = 20i32;
        let plot_w = w as i32 - 2 * margin;
        let plot_h = h as i32 - 2 * margin;
        let bar_w = (plot_w / bins as i32).max(1);
        let base_y = h as i32 - margin;

        for (i, &count) in counts.iter().enumerate() {
            let x0 = margin + i as i32 * bar_w;
            let bar_h = ((count as f64 / max_count as f64) * plot_h as f64) as i32;
            let bar = Rectangle::new(
                [(x0 + 1, base_y - bar_h), (x0 + bar_w - 1, base_y)],
                BLUE.filled(),
            );
            root.draw(&bar).map_err(|e| e.to_string())?;
        }
        Ok(())
    })
}
