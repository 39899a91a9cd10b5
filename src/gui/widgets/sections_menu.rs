//! Right-click menu of the status bar

use egui::{Button, Ui};
use statusbar_core::i18n::{keys, t};
use statusbar_core::StatusBarState;

struct MenuEntry {
    name: String,
    label: String,
    visible: bool,
}

/// Menu contents: every section with a check toggle and move buttons, then
/// the global speeds toggle.
pub fn show(ui: &mut Ui, state: &mut StatusBarState) {
    let entries: Vec<MenuEntry> = state
        .sections()
        .display_order()
        .into_iter()
        .map(|i| {
            let section = &state.sections().sections()[i];
            MenuEntry {
                name: section.name.clone(),
                label: section
                    .kind()
                    .map_or_else(|| section.name.clone(), |kind| t(kind.label_key())),
                visible: section.visible,
            }
        })
        .collect();
    let last = entries.len().saturating_sub(1);

    for (position, entry) in entries.iter().enumerate() {
        ui.horizontal(|ui| {
            let mut visible = entry.visible;
            if ui.checkbox(&mut visible, entry.label.as_str()).clicked() {
                if let Err(e) = state.toggle_section(&entry.name) {
                    tracing::warn!("Could not toggle section: {}", e);
                }
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let later = ui
                    .add_enabled(position < last, Button::new("▶").small())
                    .on_hover_text(t(keys::MENU_MOVE_LATER));
                if later.clicked() {
                    if let Err(e) = state.shift_section(&entry.name, 1) {
                        tracing::warn!("Could not move section: {}", e);
                    }
                }
                let earlier = ui
                    .add_enabled(position > 0, Button::new("◀").small())
                    .on_hover_text(t(keys::MENU_MOVE_EARLIER));
                if earlier.clicked() {
                    if let Err(e) = state.shift_section(&entry.name, -1) {
                        tracing::warn!("Could not move section: {}", e);
                    }
                }
            });
        });
    }

    ui.separator();

    let mut global = state.show_global_speeds();
    if ui.checkbox(&mut global, t(keys::MENU_SHOW_GLOBAL_SPEEDS)).clicked() {
        state.toggle_global_speeds();
    }

    ui.separator();

    if ui.button(t(keys::MENU_RESET_SECTIONS)).clicked() {
        state.reset_sections();
        ui.close_menu();
    }
}
