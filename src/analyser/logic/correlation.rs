use super::types::{CRITIC_SCORE, GLOBAL_SALES};
use crate::error::Result;
use polars::prelude::*;

/// Rows where both critic score and global sales are present and finite,
/// reduced to those two columns.
fn complete_pairs(df: &DataFrame) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .select([col(CRITIC_SCORE), col(GLOBAL_SALES)])
        .filter(
            col(CRITIC_SCORE)
                .is_finite()
                .and(col(GLOBAL_SALES).is_finite()),
        )
        .collect()?;
    Ok(out)
}

/// `[critic_score, global_sales]` for every row where both are present.
pub fn critic_sales_points(df: &DataFrame) -> Result<Vec<[f64; 2]>> {
    let pairs = complete_pairs(df)?;
    let critic = pairs.column(CRITIC_SCORE)?.as_materialized_series().f64()?;
    let sales = pairs.column(GLOBAL_SALES)?.as_materialized_series().f64()?;

    Ok(critic
        .into_iter()
        .zip(sales)
        .filter_map(|pair| match pair {
            (Some(x), Some(y)) => Some([x, y]),
            _ => None,
        })
        .collect())
}

/// Pearson correlation between critic score and global sales over
/// pairwise-complete rows. `NaN` when it is undefined.
pub fn critic_commercial_correlation(df: &DataFrame) -> Result<f64> {
    let pairs = complete_pairs(df)?;
    let critic = pairs.column(CRITIC_SCORE)?.as_materialized_series().f64()?;
    let sales = pairs.column(GLOBAL_SALES)?.as_materialized_series().f64()?;

    let r = pearson_correlation(critic, sales);
    log::debug!("critic/sales correlation over {} rows: {r}", pairs.height());
    Ok(r)
}

/// Pearson's r for two null-free columns of equal length.
///
/// Returns `NaN` for fewer than two rows or when either column is constant.
pub fn pearson_correlation(x: &Float64Chunked, y: &Float64Chunked) -> f64 {
    if x.len() < 2 || x.len() != y.len() {
        return f64::NAN;
    }
    // Checked on the values: a constant column can still show a tiny
    // non-zero variance once its mean is rounded.
    if is_constant(x) || is_constant(y) {
        return f64::NAN;
    }

    cov::pearson_corr(x, y).map_or(f64::NAN, |r| r.clamp(-1.0, 1.0))
}

fn is_constant(ca: &Float64Chunked) -> bool {
    ca.min() == ca.max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(xs: &[f64], ys: &[f64]) -> (Float64Chunked, Float64Chunked) {
        (
            Float64Chunked::from_slice("x".into(), xs),
            Float64Chunked::from_slice("y".into(), ys),
        )
    }

    #[test]
    fn test_perfect_negative() {
        let (x, y) = columns(&[1.0, 2.0, 3.0, 4.0], &[10.0, 8.0, 6.0, 4.0]);
        assert!((pearson_correlation(&x, &y) + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_is_nan() {
        let (x, y) = columns(&[1.0], &[2.0]);
        assert!(pearson_correlation(&x, &y).is_nan());

        let (x, y) = columns(&[], &[]);
        assert!(pearson_correlation(&x, &y).is_nan());
    }

    #[test]
    fn test_zero_variance_is_nan() {
        let (x, y) = columns(&[70.0, 70.0, 70.0], &[1.0, 2.0, 3.0]);
        assert!(pearson_correlation(&x, &y).is_nan());

        let (x, y) = columns(&[1.0, 2.0, 3.0], &[0.5, 0.5, 0.5]);
        assert!(pearson_correlation(&x, &y).is_nan());
    }

    #[test]
    fn test_constant_fractional_score_is_nan() {
        // Means of 7.1 and 0.1 are inexact in binary
        let (x, y) = columns(&[7.1, 7.1, 7.1], &[1.0, 2.0, 3.0]);
        assert!(pearson_correlation(&x, &y).is_nan());

        let (x, y) = columns(&[0.1, 0.1, 0.1], &[1.0, 2.0, 3.0]);
        assert!(pearson_correlation(&x, &y).is_nan());
    }

    #[test]
    fn test_complete_pairs_only() -> anyhow::Result<()> {
        let df = df!(
            CRITIC_SCORE => [Some(60.0), None, Some(80.0), Some(f64::NAN), Some(90.0)],
            GLOBAL_SALES => [Some(1.0), Some(5.0), None, Some(2.0), Some(3.0)]
        )?;

        let points = critic_sales_points(&df)?;
        assert_eq!(points, vec![[60.0, 1.0], [90.0, 3.0]]);

        let r = critic_commercial_correlation(&df)?;
        assert!((r - 1.0).abs() < 1e-9);
        Ok(())
    }
}
