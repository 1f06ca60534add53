use super::types::{SALES_COLUMNS, SCORE_COLUMNS, TEXT_COLUMNS, YEAR};
use crate::error::Result;
use polars::prelude::*;

/// Normalises column types so the aggregations can rely on them.
///
/// - Score columns become Float64. Cells that do not parse as numbers
///   (`"tbd"`, blanks) become null; numeric cells are kept as they are.
/// - Sales columns are cast strictly, so a non-numeric sales figure fails
///   the run instead of silently dropping out of the totals.
/// - `Year_of_Release` becomes Int32 through Float64, so `2006.0` and `2006`
///   land in the same group and `N/A` becomes null.
///
/// No rows are dropped.
///
/// # Errors
///
/// Returns [`crate::error::AnalyserError::Parse`] when a sales column holds
/// a non-numeric value.
pub fn clean_df(df: DataFrame) -> Result<DataFrame> {
    let mut exprs = Vec::new();

    for name in SCORE_COLUMNS {
        let dtype = df.column(name)?.dtype().clone();
        exprs.push(coerce_score(name, &dtype));
    }

    for name in TEXT_COLUMNS {
        exprs.push(col(name).cast(DataType::String));
    }

    for name in SALES_COLUMNS {
        exprs.push(col(name).strict_cast(DataType::Float64));
    }

    exprs.push(col(YEAR).cast(DataType::Float64).cast(DataType::Int32));

    let cleaned = df.lazy().with_columns(exprs).collect()?;

    for name in SCORE_COLUMNS {
        log::debug!(
            "{name}: {} missing after coercion",
            cleaned.column(name)?.null_count()
        );
    }

    Ok(cleaned)
}

/// Builds the coercion for one score column given its inferred type.
pub fn coerce_score(name: &str, dtype: &DataType) -> Expr {
    if dtype.is_primitive_numeric() {
        col(name).cast(DataType::Float64)
    } else {
        // Non-strict cast: anything that is not a number becomes null
        col(name)
            .cast(DataType::String)
            .str()
            .strip_chars(lit(NULL))
            .cast(DataType::Float64)
    }
}
