use crate::theme;
use crate::utils::truncate_label;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, Points};

pub fn render_genre_sales(ui: &mut egui::Ui, genre_totals: &[(String, f64)], height: f32) {
    ui.vertical(|ui| {
        ui.heading("Total Sales by Genre");
        ui.add_space(theme::SPACING_TINY);

        if genre_totals.is_empty() {
            ui.label("—");
            return;
        }

        let bars: Vec<Bar> = genre_totals
            .iter()
            .enumerate()
            .map(|(i, (genre, total))| {
                Bar::new(i as f64, *total)
                    .name(genre)
                    .width(0.7)
                    .stroke(egui::Stroke::new(0.5, theme::ACCENT_COLOR))
            })
            .collect();

        let chart = BarChart::new("Global_Sales", bars)
            .color(theme::ACCENT_COLOR.linear_multiply(0.6))
            .element_formatter(Box::new(|bar, _| {
                format!("{}\n{:.2}M units", bar.name, bar.value)
            }));

        let labels: Vec<String> = genre_totals
            .iter()
            .map(|(genre, _)| truncate_label(genre, 10))
            .collect();

        Plot::new("plot_genre_sales")
            .height(height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_y(0.0)
            .show_grid([false, true])
            .x_axis_formatter(move |mark, _range| axis_label(&labels, mark.value))
            .y_axis_label("Global_Sales (M)")
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    });
}

/// Category label for an integer tick, blank between ticks.
pub fn axis_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

pub fn render_publisher_timeline(
    ui: &mut egui::Ui,
    series: &[(String, Vec<[f64; 2]>)],
    height: f32,
) {
    ui.vertical(|ui| {
        ui.heading("Top Publishers Performance Over Time");
        ui.add_space(theme::SPACING_TINY);

        if series.iter().all(|(_, points)| points.is_empty()) {
            ui.label("—");
            return;
        }

        Plot::new("plot_publisher_timeline")
            .height(height)
            .legend(Legend::default())
            .x_axis_label("Year_of_Release")
            .y_axis_label("Global_Sales (M)")
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .show(ui, |plot_ui| {
                for (i, (publisher, points)) in series.iter().enumerate() {
                    plot_ui.line(
                        Line::new(publisher.as_str(), points.clone())
                            .color(theme::series_color(i))
                            .width(2.0),
                    );
                }
            });
    });
}

pub fn render_critic_scatter(
    ui: &mut egui::Ui,
    points: &[[f64; 2]],
    correlation: f64,
    height: f32,
) {
    ui.vertical(|ui| {
        ui.heading(format!(
            "Critic Score vs Sales (correlation: {correlation:.2})"
        ));
        ui.add_space(theme::SPACING_TINY);

        if points.is_empty() {
            ui.label("—");
            return;
        }

        let scatter = Points::new("Titles", points.to_vec())
            .radius(2.0)
            .color(theme::ACCENT_COLOR.gamma_multiply(0.5));

        Plot::new("plot_critic_scatter")
            .height(height)
            .x_axis_label("Critic_Score")
            .y_axis_label("Global_Sales (M)")
            .show(ui, |plot_ui| {
                plot_ui.points(scatter);
            });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_label() {
        let labels = vec!["Action".to_owned(), "Sports".to_owned()];
        assert_eq!(axis_label(&labels, 0.0), "Action");
        assert_eq!(axis_label(&labels, 1.0), "Sports");
        assert_eq!(axis_label(&labels, 0.5), "");
        assert_eq!(axis_label(&labels, 2.0), "");
        assert_eq!(axis_label(&labels, -1.0), "");
    }
}
