use super::aggregation::rank_by_sales;
use super::types::{AnalysisViews, GenreSuccess, Insights, PublisherTotal, RegionalShare};
use crate::config::AnalysisConfig;
use crate::utils::{fmt_opt, truncate_label};
use std::fmt::Write as _;

const LABEL_WIDTH: usize = 28;

/// Picks the headline numbers out of the computed views.
pub fn build_insights(views: &AnalysisViews, config: &AnalysisConfig) -> Insights {
    let mut top_genres: Vec<GenreSuccess> = views.genre_success.clone();
    top_genres.sort_by(|a, b| {
        b.total_sales
            .total_cmp(&a.total_sales)
            .then_with(|| a.genre.cmp(&b.genre))
    });
    top_genres.truncate(config.report_top_n);

    // Ranked from all publishers, not the timeline's top set
    let mut top_publishers: Vec<PublisherTotal> = views.publisher_totals.clone();
    rank_by_sales(&mut top_publishers);
    top_publishers.truncate(config.report_top_n);

    Insights {
        top_genres,
        regional_preferences: views.regional_preferences.clone(),
        critic_commercial_correlation: views.critic_commercial_correlation,
        top_publishers,
    }
}

/// Renders the console report.
pub fn format_report(insights: &Insights) -> String {
    let mut out = String::new();
    out.push_str("\nKey Insights:\n");
    out.push_str("=============\n");

    out.push_str("\nTop Performing Genres:\n");
    write_genre_table(&mut out, &insights.top_genres);

    out.push_str("\nRegional Market Preferences:\n");
    write_regional_table(&mut out, &insights.regional_preferences);

    let _ = writeln!(
        out,
        "\nCorrelation between Critic Scores and Sales: {:.2}",
        insights.critic_commercial_correlation
    );

    out.push_str("\nTop Publishers by Global Sales:\n");
    write_publisher_table(&mut out, &insights.top_publishers);

    out
}

fn write_genre_table(out: &mut String, rows: &[GenreSuccess]) {
    if rows.is_empty() {
        out.push_str("  (no data)\n");
        return;
    }
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {:>6} {:>10} {:>8} {:>8}",
        "Genre", "Count", "Total", "Mean", "Critic"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$} {:>6} {:>10} {:>8} {:>8}",
            truncate_label(&row.genre, LABEL_WIDTH),
            row.count,
            fmt_opt(Some(row.total_sales)),
            fmt_opt(Some(row.mean_sales)),
            fmt_opt(row.mean_critic_score),
        );
    }
}

fn write_regional_table(out: &mut String, rows: &[RegionalShare]) {
    if rows.is_empty() {
        out.push_str("  (no data)\n");
        return;
    }
    let _ = writeln!(
        out,
        "{:<LABEL_WIDTH$} {:>8} {:>8} {:>8}",
        "Genre", "NA", "EU", "JP"
    );
    for row in rows {
        let [na, eu, jp] = row.ratios();
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$} {:>8} {:>8} {:>8}",
            truncate_label(&row.genre, LABEL_WIDTH),
            fmt_opt(na),
            fmt_opt(eu),
            fmt_opt(jp),
        );
    }
}

fn write_publisher_table(out: &mut String, rows: &[PublisherTotal]) {
    if rows.is_empty() {
        out.push_str("  (no data)\n");
        return;
    }
    let _ = writeln!(out, "{:<LABEL_WIDTH$} {:>12}", "Publisher", "Global_Sales");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<LABEL_WIDTH$} {:>12}",
            truncate_label(&row.publisher, LABEL_WIDTH),
            fmt_opt(Some(row.total_sales)),
        );
    }
}
