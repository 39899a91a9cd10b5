//! Application theming

use egui::{Color32, CornerRadius, FontFamily, FontId, TextStyle, Visuals};
use statusbar_core::config::{FontScale, ThemeMode};

/// Apply a color scheme to the egui context
pub fn apply(ctx: &egui::Context, mode: ThemeMode) {
    match mode {
        ThemeMode::Dark => ctx.set_visuals(dark_visuals()),
        ThemeMode::Light => ctx.set_visuals(light_visuals()),
    }
}

/// Scale the text styles
pub fn apply_font_scale(ctx: &egui::Context, scale: FontScale) {
    let factor = scale.factor();
    ctx.style_mut(|style| {
        style.text_styles = [
            (TextStyle::Small, FontId::new(10.0 * factor, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(13.0 * factor, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(13.0 * factor, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(18.0 * factor, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(13.0 * factor, FontFamily::Monospace)),
        ]
        .into();
    });
}

/// Status bar background for a scheme
pub fn status_bar_fill(mode: ThemeMode) -> Color32 {
    match mode {
        ThemeMode::Dark => Color32::from_rgb(28, 28, 32),
        ThemeMode::Light => Color32::from_rgb(235, 235, 240),
    }
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.window_corner_radius = CornerRadius::same(8);

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(30, 30, 35);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(40, 40, 48);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(55, 55, 65);
    visuals.widgets.active.bg_fill = Color32::from_rgb(70, 130, 180);

    visuals.panel_fill = Color32::from_rgb(24, 24, 28);
    visuals.window_fill = Color32::from_rgb(30, 30, 35);
    visuals.selection.bg_fill = Color32::from_rgb(70, 130, 180);
    visuals.error_fg_color = Color32::from_rgb(255, 100, 100);

    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();
    visuals.window_corner_radius = CornerRadius::same(8);

    visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(245, 245, 248);
    visuals.widgets.inactive.bg_fill = Color32::from_rgb(235, 235, 240);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(220, 220, 230);
    visuals.widgets.active.bg_fill = Color32::from_rgb(70, 130, 180);

    visuals.panel_fill = Color32::from_rgb(250, 250, 252);
    visuals.window_fill = Color32::from_rgb(255, 255, 255);
    visuals.selection.bg_fill = Color32::from_rgb(100, 150, 200);

    visuals
}
