//! Timestamped raw-data snapshots.

use std::path::{Path, PathBuf};

use polars::prelude::*;

use crate::error::DataResult;

/// Write `df` to `{out_dir}/{prefix}_{YYYYMMDD-HHMM}.csv`, creating the
/// directory if needed, and return the written path.
///
/// The timestamp has minute resolution, so snapshots taken within the same
/// minute overwrite each other.
pub fn save_raw_csv(
    df: &mut DataFrame,
    prefix: &str,
    out_dir: impl AsRef<Path>,
) -> DataResult<PathBuf> {
    let out = out_dir.as_ref();
    std::fs::create_dir_all(out)?;

    let ts = chrono::Local::now().format("%Y%m%d-%H%M");
    let path = out.join(format!("{prefix}_{ts}.csv"));

    let mut file = std::fs::File::create(&path)?;
    CsvWriter::new(&mut file).include_header(true).finish(df)?;

    tracing::info!(path = %path.display(), rows = df.height(), "saved raw csv");
    Ok(path)
}
