//! Grouped views over the cleaned sales table.
//!
//! Every function here is read-only: it clones the (cheap, reference-counted)
//! frame into a `LazyFrame`, runs one group-by, and copies the result out into
//! plain structs. Polars gives no ordering guarantee for group-by output, so
//! each view is sorted in Rust before it is returned.
//!
//! Nulls are the missing-value marker throughout. `sum`/`mean` skip them and
//! `count` excludes them, which is exactly what the views need.

use super::types::{
    EU_RATIO, EU_SALES, GENRE, GLOBAL_SALES, GenreSuccess, JP_RATIO, JP_SALES, NA_RATIO,
    NA_SALES, NAME, PLATFORM, PUBLISHER, PlatformYearSales, PublisherTimeline, PublisherTotal,
    PublisherYearSales, RegionalShare, CRITIC_SCORE, YEAR,
};
use crate::error::Result;
use polars::prelude::*;

const DECIMALS: u32 = 2;

/// Count, total and mean global sales plus mean critic score per genre.
///
/// Titles without a genre are left out. Ordered by genre name.
pub fn genre_success(df: &DataFrame) -> Result<Vec<GenreSuccess>> {
    let out = df
        .clone()
        .lazy()
        .filter(col(GENRE).is_not_null())
        .group_by([col(GENRE)])
        .agg([
            col(GLOBAL_SALES)
                .count()
                .cast(DataType::UInt64)
                .alias("count"),
            col(GLOBAL_SALES).sum().round(DECIMALS).alias("total_sales"),
            col(GLOBAL_SALES).mean().round(DECIMALS).alias("mean_sales"),
            col(CRITIC_SCORE)
                .mean()
                .round(DECIMALS)
                .alias("mean_critic_score"),
        ])
        .collect()?;

    let genres = string_values(&out, GENRE)?;
    let counts = u64_values(&out, "count")?;
    let totals = f64_values(&out, "total_sales")?;
    let means = f64_values(&out, "mean_sales")?;
    let critic = f64_values(&out, "mean_critic_score")?;

    let mut rows: Vec<GenreSuccess> = genres
        .into_iter()
        .enumerate()
        .filter_map(|(i, genre)| {
            Some(GenreSuccess {
                genre: genre?,
                count: counts.get(i).copied().flatten().unwrap_or(0),
                total_sales: totals.get(i).copied().flatten().unwrap_or(0.0),
                mean_sales: means.get(i).copied().flatten().unwrap_or(f64::NAN),
                mean_critic_score: critic.get(i).copied().flatten(),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.genre.cmp(&b.genre));
    log::debug!("genre_success: {} genres", rows.len());
    Ok(rows)
}

/// Share of global sales taken by one region, or null when global sales are
/// zero (or missing).
pub fn regional_ratio(region: &str) -> Expr {
    when(col(GLOBAL_SALES).eq(lit(0.0)))
        .then(lit(NULL).cast(DataType::Float64))
        .otherwise(col(region) / col(GLOBAL_SALES))
}

/// Adds `NA_Ratio`, `EU_Ratio` and `JP_Ratio` to a copy of the table.
pub fn with_regional_ratios(df: &DataFrame) -> Result<DataFrame> {
    let out = df
        .clone()
        .lazy()
        .with_columns([
            regional_ratio(NA_SALES).alias(NA_RATIO),
            regional_ratio(EU_SALES).alias(EU_RATIO),
            regional_ratio(JP_SALES).alias(JP_RATIO),
        ])
        .collect()?;
    Ok(out)
}

/// Mean regional share of sales per genre. Ordered by genre name.
pub fn regional_preferences(df: &DataFrame) -> Result<Vec<RegionalShare>> {
    let out = with_regional_ratios(df)?
        .lazy()
        .filter(col(GENRE).is_not_null())
        .group_by([col(GENRE)])
        .agg([
            col(NA_RATIO).mean().round(DECIMALS),
            col(EU_RATIO).mean().round(DECIMALS),
            col(JP_RATIO).mean().round(DECIMALS),
        ])
        .collect()?;

    let genres = string_values(&out, GENRE)?;
    let na = f64_values(&out, NA_RATIO)?;
    let eu = f64_values(&out, EU_RATIO)?;
    let jp = f64_values(&out, JP_RATIO)?;

    let mut rows: Vec<RegionalShare> = genres
        .into_iter()
        .enumerate()
        .filter_map(|(i, genre)| {
            Some(RegionalShare {
                genre: genre?,
                na_ratio: na.get(i).copied().flatten(),
                eu_ratio: eu.get(i).copied().flatten(),
                jp_ratio: jp.get(i).copied().flatten(),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.genre.cmp(&b.genre));
    Ok(rows)
}

/// Total global sales per publisher, biggest first.
pub fn publisher_totals(df: &DataFrame) -> Result<Vec<PublisherTotal>> {
    let out = df
        .clone()
        .lazy()
        .filter(col(PUBLISHER).is_not_null())
        .group_by([col(PUBLISHER)])
        .agg([col(GLOBAL_SALES).sum()])
        .collect()?;

    let publishers = string_values(&out, PUBLISHER)?;
    let totals = f64_values(&out, GLOBAL_SALES)?;

    let mut rows: Vec<PublisherTotal> = publishers
        .into_iter()
        .enumerate()
        .filter_map(|(i, publisher)| {
            Some(PublisherTotal {
                publisher: publisher?,
                total_sales: totals.get(i).copied().flatten().unwrap_or(0.0),
            })
        })
        .collect();

    rank_by_sales(&mut rows);
    Ok(rows)
}

/// Sorts by total sales descending, then name ascending, so ties never
/// depend on group-by order. Totals are compared at reporting precision, so
/// sums that differ only in the last bit still tie.
pub fn rank_by_sales(rows: &mut [PublisherTotal]) {
    rows.sort_by(|a, b| {
        rounded(b.total_sales)
            .total_cmp(&rounded(a.total_sales))
            .then_with(|| a.publisher.cmp(&b.publisher))
    });
}

fn rounded(value: f64) -> f64 {
    let scale = 10_f64.powi(DECIMALS as i32);
    (value * scale).round() / scale
}

/// Yearly global sales for the `top_n` largest publishers.
///
/// Titles without a release year stay in a `year: None` group, so summing a
/// publisher's points gives back its total.
pub fn publisher_timeline(df: &DataFrame, top_n: usize) -> Result<PublisherTimeline> {
    let top_publishers: Vec<PublisherTotal> =
        publisher_totals(df)?.into_iter().take(top_n).collect();
    if top_publishers.is_empty() {
        return Ok(PublisherTimeline::default());
    }

    let names: Vec<&str> = top_publishers
        .iter()
        .map(|p| p.publisher.as_str())
        .collect();
    let allowed = Series::new("top_publishers".into(), names.as_slice());

    let out = df
        .clone()
        .lazy()
        .filter(col(PUBLISHER).is_in(lit(allowed)))
        .group_by([col(PUBLISHER), col(YEAR)])
        .agg([col(GLOBAL_SALES).sum()])
        .collect()?;

    let publishers = string_values(&out, PUBLISHER)?;
    let years = i32_values(&out, YEAR)?;
    let sales = f64_values(&out, GLOBAL_SALES)?;

    let mut points: Vec<PublisherYearSales> = publishers
        .into_iter()
        .enumerate()
        .filter_map(|(i, publisher)| {
            Some(PublisherYearSales {
                publisher: publisher?,
                year: years.get(i).copied().flatten(),
                global_sales: sales.get(i).copied().flatten().unwrap_or(0.0),
            })
        })
        .collect();

    points.sort_by(|a, b| a.publisher.cmp(&b.publisher).then(a.year.cmp(&b.year)));
    log::debug!(
        "publisher_timeline: {} publishers, {} points",
        top_publishers.len(),
        points.len()
    );

    Ok(PublisherTimeline {
        top_publishers,
        points,
    })
}

/// Global sales and title count per platform and release year.
pub fn platform_lifecycle(df: &DataFrame) -> Result<Vec<PlatformYearSales>> {
    let out = df
        .clone()
        .lazy()
        .filter(col(PLATFORM).is_not_null())
        .group_by([col(PLATFORM), col(YEAR)])
        .agg([
            col(GLOBAL_SALES).sum(),
            col(NAME).count().cast(DataType::UInt64).alias("title_count"),
        ])
        .collect()?;

    let platforms = string_values(&out, PLATFORM)?;
    let years = i32_values(&out, YEAR)?;
    let sales = f64_values(&out, GLOBAL_SALES)?;
    let titles = u64_values(&out, "title_count")?;

    let mut rows: Vec<PlatformYearSales> = platforms
        .into_iter()
        .enumerate()
        .filter_map(|(i, platform)| {
            Some(PlatformYearSales {
                platform: platform?,
                year: years.get(i).copied().flatten(),
                global_sales: sales.get(i).copied().flatten().unwrap_or(0.0),
                title_count: titles.get(i).copied().flatten().unwrap_or(0),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.platform.cmp(&b.platform).then(a.year.cmp(&b.year)));
    Ok(rows)
}

// COLUMN EXTRACTION

pub(crate) fn string_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df.column(name)?.as_materialized_series();
    let ca = series.str()?;
    Ok(ca.into_iter().map(|v| v.map(str::to_owned)).collect())
}

pub(crate) fn f64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df.column(name)?.as_materialized_series();
    let ca = series.f64()?;
    Ok(ca.into_iter().collect())
}

pub(crate) fn i32_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i32>>> {
    let series = df.column(name)?.as_materialized_series();
    let ca = series.i32()?;
    Ok(ca.into_iter().collect())
}

pub(crate) fn u64_values(df: &DataFrame, name: &str) -> Result<Vec<Option<u64>>> {
    let series = df.column(name)?.as_materialized_series();
    let ca = series.u64()?;
    Ok(ca.into_iter().collect())
}
