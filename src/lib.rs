//! `tabprep` is a small synchronous library for the early stages of a tabular
//! data workflow, built on [Polars] `DataFrame`s: acquisition (HTTP API
//! download and HTML table scraping), validation, CSV/Parquet persistence,
//! cleaning, outlier handling, exploratory profiling, figure output, and a
//! feature-engineering transform.
//!
//! Every function is a stateless, single-pass transform over an in-memory
//! frame: it takes its data as an argument and returns a new frame (or mask).
//! There is no pipeline runtime, no shared state, and no concurrency; the
//! only retry anywhere is a single one-shot reattempt in
//! [`ingest::download_daily_prices`].
//!
//! [Polars]: https://docs.rs/polars
//!
//! ## Modules
//!
//! - [`config`]: optional API key from the nearest `.env` file
//! - [`stats`]: descriptive summary statistics with optional group means
//! - [`ingest`]: price download, HTML table scraping, validation, raw snapshots
//! - [`storage`]: extension-dispatched CSV/Parquet read and write
//! - [`cleaning`]: median imputation, row dropping, normalization
//! - [`outliers`]: IQR and z-score detection, winsorization
//! - [`eda`]: structure/missing and numeric profiles, figure saving
//! - [`features`]: spend/income engineered columns
//! - [`frame`]: shared column helpers
//! - [`error`]: the crate-wide error type
//!
//! ## Quick example: clean and flag
//!
//! ```rust
//! use polars::df;
//! use polars::prelude::*;
//! use tabprep::cleaning::{fill_missing_median, normalize, NormalizeMethod};
//! use tabprep::outliers::detect_outliers_zscore;
//!
//! # fn main() -> Result<(), tabprep::DataError> {
//! let df = df!(
//!     "city" => ["a", "b", "c", "d"],
//!     "price" => [Some(1.0), None, Some(3.0), Some(100.0)],
//! )?;
//!
//! // Replace the missing price with the column median.
//! let filled = fill_missing_median(&df, None)?;
//! assert_eq!(filled.column("price")?.null_count(), 0);
//!
//! // Standard-score the numeric columns.
//! let scaled = normalize(&filled, None, NormalizeMethod::Standard)?;
//! assert_eq!(scaled.height(), 4);
//!
//! // Flag extreme prices.
//! let mask = detect_outliers_zscore(
//!     df.column("price")?.as_materialized_series(),
//!     1.5,
//! )?;
//! assert_eq!(mask.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Quick example: acquire, validate, persist
//!
//! ```no_run
//! use tabprep::ingest::{download_daily_prices, validate_frame};
//! use tabprep::storage::{read_frame, write_frame};
//!
//! # fn main() -> Result<(), tabprep::DataError> {
//! let mut prices = download_daily_prices("AAPL")?;
//! validate_frame(&prices, &["Date", "Close"], true, false)?;
//!
//! write_frame(&mut prices, "data/processed/prices.parquet")?;
//! let back = read_frame("data/processed/prices.parquet", &[])?;
//! assert_eq!(back.height(), prices.height());
//! # Ok(())
//! # }
//! ```

pub mod cleaning;
pub mod config;
pub mod eda;
pub mod error;
pub mod features;
pub mod frame;
pub mod ingest;
pub mod outliers;
pub mod stats;
pub mod storage;

pub use error::{DataError, DataResult};
