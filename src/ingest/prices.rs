//! Daily price-history download.
//!
//! Fetches the last five days of daily bars for a ticker from the Yahoo
//! Finance v8 chart endpoint and converts the JSON payload into a
//! [`DataFrame`] with flat columns `Date, Open, High, Low, Close, Adj Close,
//! Volume`. Gaps reported by the API become nulls.
//!
//! An empty result triggers exactly one retry after a short fixed delay;
//! a still-empty result is an error.

use std::thread;
use std::time::Duration;

use polars::prelude::*;
use serde::Deserialize;

use crate::error::{DataError, DataResult};

use super::{REQUEST_TIMEOUT, USER_AGENT};

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Top-level chart API payload.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Bar timestamps as unix seconds.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
    #[serde(default)]
    pub adjclose: Vec<AdjClose>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<i64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdjClose {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}

/// Download daily price history for `ticker` over the last five days.
///
/// On an empty result, sleeps briefly and retries exactly once; if the retry
/// is also empty, returns [`DataError::EmptyDownload`].
pub fn download_daily_prices(ticker: &str) -> DataResult<DataFrame> {
    let mut df = fetch_chart(ticker)?;
    if df.height() == 0 {
        thread::sleep(RETRY_DELAY);
        df = fetch_chart(ticker)?;
    }
    if df.height() == 0 {
        return Err(DataError::EmptyDownload {
            ticker: ticker.to_string(),
        });
    }
    Ok(df)
}

fn fetch_chart(ticker: &str) -> DataResult<DataFrame> {
    let url = format!("{CHART_URL}/{ticker}?range=5d&interval=1d");
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    let resp = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(DataError::HttpStatus {
            status: status.as_u16(),
            url,
        });
    }

    let payload: ChartResponse = resp.json()?;
    frame_from_chart(payload)
}

/// Convert a decoded chart payload into a price frame.
///
/// Returns an empty frame when the payload carries no result or no bars.
/// `Date` is a millisecond datetime column; prices are `Float64`, volume is
/// `Int64`, and any series the API reports short is padded with nulls.
pub fn frame_from_chart(payload: ChartResponse) -> DataResult<DataFrame> {
    let result = payload
        .chart
        .result
        .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)));
    let Some(result) = result else {
        return Ok(DataFrame::empty());
    };

    let n = result.timestamp.len();
    if n == 0 {
        return Ok(DataFrame::empty());
    }

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let adjclose = result
        .indicators
        .adjclose
        .into_iter()
        .next()
        .unwrap_or_default();

    let millis: Vec<i64> = result.timestamp.iter().map(|t| t * 1000).collect();
    let date = Series::new("Date".into(), millis)
        .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

    let columns = vec![
        date.into_column(),
        Series::new("Open".into(), aligned(quote.open, n)).into_column(),
        Series::new("High".into(), aligned(quote.high, n)).into_column(),
        Series::new("Low".into(), aligned(quote.low, n)).into_column(),
        Series::new("Close".into(), aligned(quote.close, n)).into_column(),
        Series::new("Adj Close".into(), aligned(adjclose.adjclose, n)).into_column(),
        Series::new("Volume".into(), aligned(quote.volume, n)).into_column(),
    ];

    Ok(DataFrame::new_infer_height(columns)?)
}

/// Pad or truncate a value series to the bar count.
fn aligned<T>(mut values: Vec<Option<T>>, n: usize) -> Vec<Option<T>> {
    values.resize_with(n, || None);
    values
}
