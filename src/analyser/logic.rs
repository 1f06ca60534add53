//! The analysis pipeline: load, clean, aggregate, report.
//!
//! ```no_run
//! use vgsales_insights::analyser::logic;
//! use vgsales_insights::config::AnalysisConfig;
//!
//! let run = logic::analyse_file_flow(&AnalysisConfig::default())?;
//! print!("{}", logic::format_report(&run.insights));
//! # Ok::<(), vgsales_insights::error::AnalyserError>(())
//! ```

pub mod aggregation;
pub mod cleaning;
pub mod correlation;
pub mod io;
pub mod report;
pub mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{
    genre_success, platform_lifecycle, publisher_timeline, publisher_totals,
    regional_preferences, with_regional_ratios,
};
pub use cleaning::clean_df;
pub use correlation::{critic_commercial_correlation, critic_sales_points, pearson_correlation};
pub use io::{load_df, validate_schema};
pub use report::{build_insights, format_report};
pub use types::{
    AnalysisViews, GenreSuccess, Insights, PlatformYearSales, PublisherTimeline, PublisherTotal,
    PublisherYearSales, RegionalShare,
};

use crate::config::AnalysisConfig;
use crate::error::Result;
use polars::prelude::DataFrame;
use std::time::Instant;

/// Everything one run produces.
pub struct AnalysisRun {
    pub df: DataFrame,
    pub views: AnalysisViews,
    pub insights: Insights,
}

/// Computes every view from a cleaned table. The steps are independent.
///
/// # Errors
///
/// Propagates polars failures from any of the group-bys.
pub fn analyse_df(df: &DataFrame, config: &AnalysisConfig) -> Result<AnalysisViews> {
    let start = Instant::now();

    let views = AnalysisViews {
        row_count: df.height(),
        genre_success: genre_success(df)?,
        regional_preferences: regional_preferences(df)?,
        publisher_totals: publisher_totals(df)?,
        publisher_timeline: publisher_timeline(df, config.top_publishers)?,
        platform_lifecycle: platform_lifecycle(df)?,
        critic_commercial_correlation: critic_commercial_correlation(df)?,
        critic_sales_points: critic_sales_points(df)?,
    };

    log::info!(
        "Aggregated {} rows into {} genres, {} platform-years in {:?}",
        views.row_count,
        views.genre_success.len(),
        views.platform_lifecycle.len(),
        start.elapsed()
    );
    Ok(views)
}

/// Load, clean, aggregate and summarise the configured file.
///
/// # Errors
///
/// Any load or parse failure aborts the run; nothing partial is returned.
pub fn analyse_file_flow(config: &AnalysisConfig) -> Result<AnalysisRun> {
    let raw = load_df(&config.data_path)?;
    let df = clean_df(raw)?;
    let views = analyse_df(&df, config)?;
    let insights = build_insights(&views, config);
    Ok(AnalysisRun {
        df,
        views,
        insights,
    })
}
