use thiserror::Error;

/// Convenience result type for tabprep operations.
pub type DataResult<T> = Result<T, DataError>;

/// Error type returned across the crate.
///
/// This is a single error enum shared by acquisition, storage, cleaning, outlier,
/// EDA, and feature-engineering functions.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Error surfaced by the Polars engine.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// HTTP transport error (connect, timeout, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON payload could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reading an env-definition file.
    #[error("env error: {0}")]
    Env(#[from] dotenvy::Error),

    /// The frame has zero rows.
    #[error("empty frame")]
    EmptyFrame,

    /// One or more required columns are absent from the frame.
    #[error("missing required columns: {columns:?}")]
    MissingColumns { columns: Vec<String> },

    /// Validation requested a numeric column but none exists.
    #[error("no numeric columns found")]
    NoNumericColumns,

    /// Validation requested a text column but none exists.
    #[error("no text columns found")]
    NoTextColumns,

    /// Persistence supports `.csv` and `.parquet` only.
    #[error("unsupported extension '{extension}' (expected .csv or .parquet)")]
    UnsupportedExtension { extension: String },

    /// Parquet read/write failed; the underlying engine reported an error.
    #[error("parquet engine error: {message}")]
    ParquetEngine { message: String },

    /// A method name did not match any known variant.
    #[error("unknown method '{method}' (expected 'standard' or 'minmax')")]
    UnknownMethod { method: String },

    /// The server answered with a non-success HTTP status.
    #[error("request to {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },

    /// The CSS selector could not be parsed.
    #[error("invalid css selector '{selector}': {message}")]
    BadSelector { selector: String, message: String },

    /// No table matched the CSS selector.
    #[error("no table found for selector: {selector}")]
    TableNotFound { selector: String },

    /// The price download returned no rows, even after the one-shot retry.
    #[error("no price data returned for ticker '{ticker}'")]
    EmptyDownload { ticker: String },

    /// A figure could not be rendered or written.
    #[error("figure error: {message}")]
    Figure { message: String },
}
