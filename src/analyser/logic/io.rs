use super::types::REQUIRED_COLUMNS;
use crate::error::{AnalyserError, Result};
use polars::prelude::*;
use std::path::Path;

/// Reads a comma-delimited file with a header row and checks its schema.
///
/// Schema inference scans the whole file, so a non-numeric score that only
/// shows up late in the file turns that column into text instead of failing
/// the read. The cleaner sorts the types out afterwards.
///
/// # Errors
///
/// - [`AnalyserError::FileNotFound`] if `path` does not exist
/// - [`AnalyserError::Parse`] if the file is not a valid delimited table
/// - [`AnalyserError::MissingColumns`] if a required column is absent
pub fn load_df(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(AnalyserError::FileNotFound(path.to_path_buf()));
    }

    log::info!("Loading {}", path.display());
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(None)
        .finish()?
        .collect()?;

    validate_schema(&df)?;
    log::info!("Loaded {} rows x {} columns", df.height(), df.width());
    Ok(df)
}

/// Fails with every required column that is missing, not just the first.
pub fn validate_schema(df: &DataFrame) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| df.column(name).is_err())
        .map(|name| (*name).to_owned())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        log::error!("Input is missing required columns: {missing:?}");
        Err(AnalyserError::MissingColumns(missing))
    }
}
