//! Trailing utility buttons: color scheme, font size, version

use crate::gui::theme;
use egui::Ui;
use statusbar_core::config::{ConfigHandle, ThemeMode};
use statusbar_core::core::title::APP_NAME;
use statusbar_core::i18n::{keys, t};

/// Width reserved for the cluster at the end of the bar
pub const CLUSTER_WIDTH: f32 = 110.0;

/// Theme toggle, font size toggle and version button
pub struct UtilityCluster {
    config: ConfigHandle,
    show_about: bool,
}

impl UtilityCluster {
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            config,
            show_about: false,
        }
    }

    /// Show the buttons; expects a right-to-left layout
    pub fn show(&mut self, ui: &mut Ui) {
        if ui
            .small_button(format!("v{}", statusbar_core::VERSION))
            .on_hover_text(t(keys::ABOUT_TITLE))
            .clicked()
        {
            self.show_about = !self.show_about;
        }

        let scale = self.config.read().interface.font_scale;
        if ui
            .small_button("A±")
            .on_hover_text(t(keys::TOGGLE_FONT_SIZE))
            .clicked()
        {
            let next = scale.next();
            self.config.write().interface.font_scale = next;
            theme::apply_font_scale(ui.ctx(), next);
            tracing::debug!(?next, "Font scale changed");
        }

        let mode = self.config.read().interface.theme;
        let icon = match mode {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "🌙",
        };
        if ui
            .small_button(icon)
            .on_hover_text(t(keys::TOGGLE_THEME))
            .clicked()
        {
            let next = mode.toggled();
            self.config.write().interface.theme = next;
            theme::apply(ui.ctx(), next);
            tracing::debug!(?next, "Color scheme changed");
        }

        if self.show_about {
            egui::Window::new(t(keys::ABOUT_TITLE))
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .show(ui.ctx(), |ui| {
                    ui.heading(APP_NAME);
                    ui.label(format!("{} v{}", statusbar_core::NAME, statusbar_core::VERSION));
                });
        }
    }
}
