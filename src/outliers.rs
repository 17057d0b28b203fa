//! Outlier detection and winsorization.
//!
//! All three functions first coerce the input to `Float64` (unparseable
//! values become null) and preserve row count. Detection returns a boolean
//! mask aligned to the input; nulls are never flagged.

use polars::prelude::*;

use crate::error::DataResult;
use crate::frame::to_float;

/// Flag values outside the IQR fences `[Q1 - k*IQR, Q3 + k*IQR]`.
///
/// Quartiles use linear interpolation. An all-null input flags nothing.
pub fn detect_outliers_iqr(series: &Series, k: f64) -> DataResult<BooleanChunked> {
    let ca = to_float(series)?;

    let q1 = ca.quantile(0.25, QuantileMethod::Linear)?;
    let q3 = ca.quantile(0.75, QuantileMethod::Linear)?;
    let (Some(q1), Some(q3)) = (q1, q3) else {
        return Ok(all_false(series));
    };

    let iqr = q3 - q1;
    let lower = q1 - k * iqr;
    let upper = q3 + k * iqr;

    let flags: Vec<bool> = ca
        .iter()
        .map(|v| matches!(v, Some(x) if x < lower || x > upper))
        .collect();
    Ok(BooleanChunked::from_slice(series.name().clone(), &flags))
}

/// Flag values whose absolute z-score exceeds `threshold`.
///
/// Uses the population standard deviation (divisor N). When the std is zero
/// or undefined, nothing is flagged.
pub fn detect_outliers_zscore(series: &Series, threshold: f64) -> DataResult<BooleanChunked> {
    let ca = to_float(series)?;

    let (Some(mean), Some(std)) = (ca.mean(), ca.std(0)) else {
        return Ok(all_false(series));
    };
    if std == 0.0 || std.is_nan() {
        return Ok(all_false(series));
    }

    let flags: Vec<bool> = ca
        .iter()
        .map(|v| matches!(v, Some(x) if (x - mean).abs() / std > threshold))
        .collect();
    Ok(BooleanChunked::from_slice(series.name().clone(), &flags))
}

/// Cap values at the `[lower, upper]` quantiles of the input.
///
/// Preserves row count and nulls; returns a `Float64` series. The quantiles
/// may be given in either order.
pub fn winsorize(series: &Series, lower: f64, upper: f64) -> DataResult<Series> {
    let ca = to_float(series)?;

    let lo = ca.quantile(lower, QuantileMethod::Linear)?;
    let hi = ca.quantile(upper, QuantileMethod::Linear)?;
    let (Some(lo), Some(hi)) = (lo, hi) else {
        // All-null input: nothing to clip.
        return Ok(ca.into_series());
    };

    // Swapped quantiles must not panic inside clamp.
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    Ok(ca.apply_values(|v| v.clamp(lo, hi)).into_series())
}

fn all_false(series: &Series) -> BooleanChunked {
    BooleanChunked::from_slice(series.name().clone(), &vec![false; series.len()])
}
