//! The chart window: one eframe viewport with four panels.
//!
//! ```text
//! ┌──────────────────────┬──────────────────────┐
//! │ Total Sales by Genre │ Regional heat-map    │
//! ├──────────────────────┼──────────────────────┤
//! │ Publisher timeline   │ Critic vs sales      │
//! └──────────────────────┴──────────────────────┘
//! ```
//!
//! The window only draws precomputed [`ChartData`]; nothing here touches the
//! table. It closes itself when a message arrives on the close channel.

pub mod heatmap;
pub mod plots;

use crate::analyser::logic::{AnalysisViews, RegionalShare};
use crate::config::AnalysisConfig;
use crate::theme;
use eframe::egui;
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Video Game Sales Insights";

/// Polling interval for the close channel while the window is idle.
const CLOSE_POLL: Duration = Duration::from_millis(200);

/// Everything the four panels draw.
#[derive(Clone, Debug, Default)]
pub struct ChartData {
    /// Summed global sales per genre, in genre order
    pub genre_totals: Vec<(String, f64)>,
    pub regional_preferences: Vec<RegionalShare>,
    /// One `[year, sales]` line per plotted publisher, biggest first
    pub publisher_series: Vec<(String, Vec<[f64; 2]>)>,
    pub critic_sales_points: Vec<[f64; 2]>,
    pub correlation: f64,
}

impl ChartData {
    pub fn from_views(views: &AnalysisViews, config: &AnalysisConfig) -> Self {
        let genre_totals = views
            .genre_success
            .iter()
            .map(|g| (g.genre.clone(), g.total_sales))
            .collect();

        let timeline = &views.publisher_timeline;
        let publisher_series = timeline
            .top_publishers
            .iter()
            .take(config.plotted_publishers)
            .map(|p| (p.publisher.clone(), timeline.series_for(&p.publisher)))
            .collect();

        Self {
            genre_totals,
            regional_preferences: views.regional_preferences.clone(),
            publisher_series,
            critic_sales_points: views.critic_sales_points.clone(),
            correlation: views.critic_commercial_correlation,
        }
    }
}

pub struct ChartsApp {
    data: ChartData,
    close_rx: Option<crossbeam_channel::Receiver<()>>,
}

impl ChartsApp {
    pub fn new(data: ChartData, close_rx: Option<crossbeam_channel::Receiver<()>>) -> Self {
        Self { data, close_rx }
    }

    fn handle_receivers(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.close_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(()) | Err(crossbeam_channel::TryRecvError::Disconnected) => {
                log::debug!("Close requested from the console prompt");
                self.close_rx = None;
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Err(crossbeam_channel::TryRecvError::Empty) => {
                ctx.request_repaint_after(CLOSE_POLL);
            }
        }
    }

    fn render_panels(&self, ui: &mut egui::Ui) {
        let panel_height = (ui.available_height() / 2.0 - 3.0 * theme::SPACING_LARGE).max(120.0);

        ui.columns(2, |columns| {
            if let [left, right] = columns {
                theme::card_frame(left).show(left, |ui| {
                    plots::render_genre_sales(ui, &self.data.genre_totals, panel_height);
                });
                theme::card_frame(right).show(right, |ui| {
                    heatmap::render_regional_heatmap(
                        ui,
                        &self.data.regional_preferences,
                        panel_height,
                    );
                });
            }
        });

        ui.add_space(theme::SPACING_SMALL);

        ui.columns(2, |columns| {
            if let [left, right] = columns {
                theme::card_frame(left).show(left, |ui| {
                    plots::render_publisher_timeline(
                        ui,
                        &self.data.publisher_series,
                        panel_height,
                    );
                });
                theme::card_frame(right).show(right, |ui| {
                    plots::render_critic_scatter(
                        ui,
                        &self.data.critic_sales_points,
                        self.data.correlation,
                        panel_height,
                    );
                });
            }
        });
    }
}

impl eframe::App for ChartsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_receivers(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_panels(ui);
        });
    }
}

/// Opens the chart window and blocks until it is closed.
///
/// # Errors
///
/// Returns the eframe error when no window can be created (for example on a
/// machine without a display).
pub fn show_charts(
    data: ChartData,
    close_rx: Option<crossbeam_channel::Receiver<()>>,
) -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1500.0, 1000.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| {
            theme::apply_chart_theme(&cc.egui_ctx);
            Ok(Box::new(ChartsApp::new(data, close_rx)))
        }),
    )
}
