use crate::analyser::logic::RegionalShare;
use crate::theme;
use crate::utils::{fmt_opt, truncate_label};
use eframe::egui;

const REGIONS: [&str; 3] = ["NA_Ratio", "EU_Ratio", "JP_Ratio"];

/// Value range used to colour the cells, from the smallest and largest
/// ratio present.
pub fn ratio_range(rows: &[RegionalShare]) -> Option<(f64, f64)> {
    let values: Vec<f64> = rows
        .iter()
        .flat_map(|r| r.ratios())
        .flatten()
        .filter(|v| v.is_finite())
        .collect();
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    Some((min, max))
}

fn scale(value: f64, (min, max): (f64, f64)) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.5
    }
}

pub fn render_regional_heatmap(ui: &mut egui::Ui, rows: &[RegionalShare], height: f32) {
    ui.vertical(|ui| {
        ui.heading("Regional Market Preferences by Genre");
        ui.add_space(theme::SPACING_TINY);

        let Some(range) = ratio_range(rows) else {
            ui.label("—");
            return;
        };

        let label_width = 110.0;
        let header_height = 20.0;
        let legend_height = 16.0;
        let cell_width = ((ui.available_width() - label_width) / REGIONS.len() as f32).max(40.0);
        let cell_height =
            ((height - header_height - legend_height) / rows.len() as f32).clamp(12.0, 36.0);

        let (rect, _response) = ui.allocate_exact_size(
            egui::vec2(
                label_width + cell_width * REGIONS.len() as f32,
                header_height + cell_height * rows.len() as f32 + legend_height,
            ),
            egui::Sense::hover(),
        );
        let painter = ui.painter();
        let font_size = (cell_height * 0.5).clamp(8.0, 12.0);

        for (j, region) in REGIONS.iter().enumerate() {
            painter.text(
                rect.min
                    + egui::vec2(
                        label_width + j as f32 * cell_width + cell_width / 2.0,
                        header_height - 4.0,
                    ),
                egui::Align2::CENTER_BOTTOM,
                *region,
                egui::FontId::proportional(11.0),
                ui.visuals().text_color(),
            );
        }

        for (i, row) in rows.iter().enumerate() {
            let top = header_height + i as f32 * cell_height;

            painter.text(
                rect.min + egui::vec2(label_width - 8.0, top + cell_height / 2.0),
                egui::Align2::RIGHT_CENTER,
                truncate_label(&row.genre, 16),
                egui::FontId::proportional(font_size),
                ui.visuals().text_color(),
            );

            for (j, value) in row.ratios().into_iter().enumerate() {
                let cell_rect = egui::Rect::from_min_size(
                    rect.min + egui::vec2(label_width + j as f32 * cell_width, top),
                    egui::vec2(cell_width, cell_height),
                );

                let (fill, text_color) = match value {
                    Some(v) if v.is_finite() => {
                        let t = scale(v, range);
                        (theme::heat_color(t), theme::heat_text_color(t))
                    }
                    _ => (theme::MISSING_COLOR, egui::Color32::WHITE),
                };
                painter.rect_filled(cell_rect.shrink(1.0), 2.0, fill);

                painter.text(
                    cell_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    fmt_opt(value),
                    egui::FontId::proportional(font_size),
                    text_color,
                );
            }
        }

        let (min, max) = range;
        painter.text(
            rect.min
                + egui::vec2(
                    label_width,
                    header_height + cell_height * rows.len() as f32 + legend_height / 2.0,
                ),
            egui::Align2::LEFT_CENTER,
            format!("scale {min:.2} (light) to {max:.2} (dark)"),
            egui::FontId::proportional(10.0),
            ui.visuals().weak_text_color(),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn share(genre: &str, na: Option<f64>, eu: Option<f64>, jp: Option<f64>) -> RegionalShare {
        RegionalShare {
            genre: genre.to_owned(),
            na_ratio: na,
            eu_ratio: eu,
            jp_ratio: jp,
        }
    }

    #[test]
    fn test_ratio_range_skips_missing() {
        let rows = [
            share("Action", Some(0.5), None, Some(0.1)),
            share("Puzzle", Some(0.3), Some(0.7), None),
        ];
        assert_eq!(ratio_range(&rows), Some((0.1, 0.7)));
    }

    #[test]
    fn test_ratio_range_empty() {
        assert_eq!(ratio_range(&[]), None);
        assert_eq!(ratio_range(&[share("Misc", None, None, None)]), None);
    }

    #[test]
    fn test_scale_flat_range() {
        assert_eq!(scale(0.4, (0.4, 0.4)), 0.5);
        assert_eq!(scale(0.7, (0.1, 0.7)), 1.0);
    }
}
