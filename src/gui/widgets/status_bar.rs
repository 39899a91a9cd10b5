//! Status bar widget

use super::sections_menu;
use super::utility_cluster::{UtilityCluster, CLUSTER_WIDTH};
use crate::gui::layout::flex_widths;
use egui::{Align, Layout, RichText, Sense, Ui};
use statusbar_core::config::ConfigHandle;
use statusbar_core::core::{section_text, SectionError, SectionKind, StatusSummary};
use statusbar_core::i18n::{keys, t};
use statusbar_core::StatusBarState;

/// Status bar widget
pub struct StatusBar {
    cluster: UtilityCluster,
    last_error: Option<SectionError>,
}

impl StatusBar {
    /// Create a new status bar
    pub fn new(config: ConfigHandle) -> Self {
        Self {
            cluster: UtilityCluster::new(config),
            last_error: None,
        }
    }

    /// Show the status bar
    pub fn show(&mut self, ui: &mut Ui, state: &mut StatusBarState, summary: &StatusSummary) {
        let response = ui.interact(ui.max_rect(), ui.id().with("statusbar_menu"), Sense::click());
        response.context_menu(|ui| sections_menu::show(ui, state));

        ui.horizontal(|ui| {
            let spacing = ui.spacing().item_spacing.x;
            let available = (ui.available_width() - CLUSTER_WIDTH - spacing).max(0.0);

            match state.layout() {
                Ok(kinds) => {
                    self.last_error = None;
                    let weights: Vec<f32> = kinds.iter().map(SectionKind::flex_weight).collect();
                    let height = ui.available_height();
                    for (kind, width) in kinds.iter().zip(flex_widths(&weights, available, spacing)) {
                        ui.allocate_ui_with_layout(
                            egui::vec2(width, height),
                            Layout::left_to_right(Align::Center),
                            |ui| {
                                ui.set_width(width);
                                section(ui, *kind, summary);
                            },
                        );
                    }
                }
                Err(e) => {
                    if self.last_error.as_ref() != Some(&e) {
                        tracing::error!("Status bar layout failed: {}", e);
                        self.last_error = Some(e.clone());
                    }
                    ui.label(
                        RichText::new(format!("{}: {}", t(keys::STATUS_ERROR), e))
                            .color(ui.visuals().error_fg_color),
                    );
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                self.cluster.show(ui);
            });
        });
    }
}

fn section(ui: &mut Ui, kind: SectionKind, summary: &StatusSummary) {
    let icon = match kind {
        SectionKind::Connection => Some("🖧"),
        SectionKind::DownloadSpeed => Some("⬇"),
        SectionKind::UploadSpeed => Some("⬆"),
        SectionKind::FreeSpace => Some("🖴"),
        SectionKind::ListTotalSize | SectionKind::SelectionSize => None,
    };
    let global = summary.global_speeds
        && matches!(kind, SectionKind::DownloadSpeed | SectionKind::UploadSpeed);

    if global {
        ui.label("🌐");
    }
    if let Some(icon) = icon {
        ui.label(icon);
    }
    ui.add(egui::Label::new(section_text(kind, summary)).truncate());
}
