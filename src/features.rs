//! Feature engineering.

use polars::prelude::*;

use crate::error::DataResult;
use crate::frame::{has_column, require_columns};

/// Add engineered spending features to a frame.
///
/// Requires `monthly_spend` and `income` columns. Adds:
///
/// - `spend_income_ratio` = `monthly_spend / income`
/// - `rolling_spend_mean` = 3-period rolling mean of `monthly_spend`
///   (minimum one period, so the first rows use what is available)
/// - `income_x_credit` = `income * credit_score`, only when a
///   `credit_score` column exists
pub fn add_features(df: &DataFrame) -> DataResult<DataFrame> {
    require_columns(df, &["monthly_spend", "income"])?;

    let spend = col("monthly_spend").cast(DataType::Float64);
    let mut exprs = vec![
        (spend.clone() / col("income")).alias("spend_income_ratio"),
        spend
            .rolling_mean(RollingOptionsFixedWindow {
                window_size: 3,
                min_periods: 1,
                ..Default::default()
            })
            .alias("rolling_spend_mean"),
    ];
    if has_column(df, "credit_score") {
        exprs.push((col("income") * col("credit_score")).alias("income_x_credit"));
    }

    Ok(df.clone().lazy().with_columns(exprs).collect()?)
}
