//! CSV/Parquet persistence.
//!
//! Format is chosen solely by file extension (`.csv` or `.parquet`,
//! case-insensitive); anything else is an
//! [`UnsupportedExtension`](crate::error::DataError::UnsupportedExtension)
//! error. Writes create missing parent directories. CSV reads accept an
//! explicit list of date columns so datetimes round-trip; Parquet preserves
//! types natively.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::{DataError, DataResult};

/// Write a frame to `path`, dispatching on the file extension.
pub fn write_frame(df: &mut DataFrame, path: impl AsRef<Path>) -> DataResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match extension_of(path).as_str() {
        "csv" => {
            let mut file = File::create(path)?;
            CsvWriter::new(&mut file).include_header(true).finish(df)?;
        }
        "parquet" => {
            let file = File::create(path)?;
            ParquetWriter::new(file)
                .finish(df)
                .map_err(|e| DataError::ParquetEngine {
                    message: e.to_string(),
                })?;
        }
        other => {
            return Err(DataError::UnsupportedExtension {
                extension: other.to_string(),
            });
        }
    }

    tracing::info!(path = %path.display(), rows = df.height(), "wrote frame");
    Ok(())
}

/// Read a frame from `path`, dispatching on the file extension.
///
/// For CSV, only the columns named in `parse_dates` are given a temporal
/// dtype (strings are cast to datetime); date-looking columns not named
/// there stay as read. Parquet ignores the list.
pub fn read_frame(path: impl AsRef<Path>, parse_dates: &[&str]) -> DataResult<DataFrame> {
    let path = path.as_ref();

    match extension_of(path).as_str() {
        "csv" => {
            let mut df = CsvReadOptions::default()
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(path.to_path_buf()))?
                .finish()?;

            for name in parse_dates {
                let series = df.column(name)?.as_materialized_series().clone();
                if !matches!(series.dtype(), DataType::Date | DataType::Datetime(_, _)) {
                    let casted =
                        series.cast(&DataType::Datetime(TimeUnit::Microseconds, None))?;
                    df.replace(name, casted.into_column())?;
                }
            }
            Ok(df)
        }
        "parquet" => {
            let file = File::open(path)?;
            ParquetReader::new(file)
                .finish()
                .map_err(|e| DataError::ParquetEngine {
                    message: e.to_string(),
                })
        }
        other => Err(DataError::UnsupportedExtension {
            extension: other.to_string(),
        }),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}
