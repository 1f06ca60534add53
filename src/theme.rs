use eframe::egui;
use egui::{Color32, CornerRadius, Margin, Stroke};

pub const ACCENT_COLOR: Color32 = Color32::from_rgb(211, 47, 47);
pub const MISSING_COLOR: Color32 = Color32::from_gray(70);

/// Line colours for the publisher timeline, cycled in order.
pub const SERIES_COLORS: [Color32; 6] = [
    Color32::from_rgb(31, 119, 180),
    Color32::from_rgb(255, 127, 14),
    Color32::from_rgb(44, 160, 44),
    Color32::from_rgb(214, 39, 40),
    Color32::from_rgb(148, 103, 189),
    Color32::from_rgb(140, 86, 75),
];

// Spacing constants
pub const SPACING_TINY: f32 = 4.0;
pub const SPACING_SMALL: f32 = 8.0;
pub const SPACING_LARGE: f32 = 20.0;

pub const MARGIN_CARD: f32 = 12.0;

// Heat-map stops: light yellow -> orange -> dark red
const HEAT_LOW: Color32 = Color32::from_rgb(255, 255, 178);
const HEAT_MID: Color32 = Color32::from_rgb(253, 141, 60);
const HEAT_HIGH: Color32 = Color32::from_rgb(189, 0, 38);

pub fn apply_chart_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(30, 30, 30);
    visuals.widgets.noninteractive.corner_radius = CornerRadius::same(6);
    visuals.selection.bg_fill = ACCENT_COLOR.linear_multiply(0.4);

    visuals.faint_bg_color = Color32::from_rgb(35, 35, 35);
    visuals.extreme_bg_color = Color32::from_rgb(20, 20, 20);

    ctx.set_visuals(visuals);
}

pub fn series_color(index: usize) -> Color32 {
    SERIES_COLORS
        .get(index % SERIES_COLORS.len())
        .copied()
        .unwrap_or(ACCENT_COLOR)
}

/// Maps `t` in `[0, 1]` onto the heat-map scale. Out-of-range input is clamped.
pub fn heat_color(t: f64) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let t = t as f32;
    if t < 0.5 {
        lerp_color(HEAT_LOW, HEAT_MID, t * 2.0)
    } else {
        lerp_color(HEAT_MID, HEAT_HIGH, (t - 0.5) * 2.0)
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

/// Dark text on the light end of the scale, white on the dark end.
pub fn heat_text_color(t: f64) -> Color32 {
    if t.is_finite() && t > 0.6 {
        Color32::WHITE
    } else {
        Color32::from_gray(20)
    }
}

pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(MARGIN_CARD as i8))
        .stroke(Stroke::new(
            1.0,
            ui.visuals().widgets.noninteractive.bg_stroke.color,
        ))
}
