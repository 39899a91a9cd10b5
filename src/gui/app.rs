//! Host window: a torrent list with the status bar underneath

use super::feed::Feed;
use super::theme;
use super::title::ViewportTitle;
use super::widgets::StatusBar;
use eframe::egui::{self, Margin, RichText};
use statusbar_core::config::ConfigHandle;
use statusbar_core::core::{SelectionSet, StatusSnapshot, Torrent};
use statusbar_core::i18n::{keys, t};
use statusbar_core::{format_byte_rate, format_bytes, StatusBarState, StatusSources};
use std::path::PathBuf;
use std::time::Duration;

const REPAINT_INTERVAL: Duration = Duration::from_millis(500);

/// Main application
pub struct StatusbarApp {
    config: ConfigHandle,
    config_path: Option<PathBuf>,
    feed: Feed,
    state: StatusBarState,
    sources: StatusSources,
    status_bar: StatusBar,
    title: ViewportTitle,
    selection: SelectionSet,
    filter: String,
    received_snapshot: bool,
}

impl StatusbarApp {
    /// Create a new application
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: ConfigHandle,
        config_path: Option<PathBuf>,
        feed: Feed,
    ) -> Self {
        {
            let cfg = config.read();
            theme::apply(&cc.egui_ctx, cfg.interface.theme);
            theme::apply_font_scale(&cc.egui_ctx, cfg.interface.font_scale);
        }

        let mut sources = StatusSources::default();
        sources.hostname.replace(config.read().server.host.clone());

        Self {
            state: StatusBarState::new(config.clone()),
            status_bar: StatusBar::new(config.clone()),
            title: ViewportTitle::new(cc.egui_ctx.clone()),
            config,
            config_path,
            feed,
            sources,
            selection: SelectionSet::new(),
            filter: String::new(),
            received_snapshot: false,
        }
    }

    fn apply_snapshot(&mut self, snapshot: StatusSnapshot) {
        if !self.received_snapshot {
            self.received_snapshot = true;
            self.selection = snapshot.selection();
            self.sources.selection.replace(self.selection.clone());
        }

        self.sources.session.replace(snapshot.session);
        self.sources.torrents.replace(snapshot.torrents);
        if !snapshot.hostname.is_empty() && *self.sources.hostname != snapshot.hostname {
            self.sources.hostname.replace(snapshot.hostname);
        }
        self.refilter();
    }

    fn track_window(&mut self, ctx: &egui::Context) {
        let (size, maximized) = ctx.input(|i| {
            let viewport = i.viewport();
            (
                viewport.inner_rect.map(|rect| [rect.width(), rect.height()]),
                viewport.maximized,
            )
        });
        if self.config.write().window.remember(size, maximized) {
            tracing::trace!(?size, ?maximized, "Window geometry changed");
        }
    }

    fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        let filtered: Vec<Torrent> = self
            .sources
            .torrents
            .iter()
            .filter(|t| needle.is_empty() || t.display_name().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.sources.filtered.replace(filtered);
    }

    fn torrent_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(t(keys::LIST_FILTER));
            if ui.text_edit_singleline(&mut self.filter).changed() {
                self.refilter();
            }
        });
        ui.separator();

        if self.sources.filtered.is_empty() {
            ui.label(RichText::new(t(keys::LIST_EMPTY)).weak());
            return;
        }

        let mut toggled = None;
        egui::ScrollArea::vertical().show(ui, |ui| {
            for torrent in self.sources.filtered.iter() {
                let selected = self.selection.contains(&torrent.id);
                let text = format!(
                    "{}   {} / {}   ⬇ {}   ⬆ {}",
                    torrent.display_name(),
                    format_bytes(u64::try_from(torrent.have_valid).unwrap_or(0)),
                    format_bytes(u64::try_from(torrent.size_when_done).unwrap_or(0)),
                    format_byte_rate(torrent.rate_download),
                    format_byte_rate(torrent.rate_upload),
                );
                if ui.selectable_label(selected, text).clicked() {
                    toggled = Some(torrent.id);
                }
            }
        });

        if let Some(id) = toggled {
            if !self.selection.remove(&id) {
                self.selection.insert(id);
            }
            self.sources.selection.replace(self.selection.clone());
        }
    }
}

impl eframe::App for StatusbarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(snapshot) = self.feed.poll() {
            self.apply_snapshot(snapshot);
        }
        self.track_window(ctx);

        let summary = self.state.refresh(&self.sources, &mut self.title).clone();
        let fill = theme::status_bar_fill(self.config.read().interface.theme);

        egui::TopBottomPanel::bottom("status_bar")
            .frame(egui::Frame::NONE.fill(fill).inner_margin(Margin::symmetric(10, 6)))
            .show(ctx, |ui| {
                self.status_bar.show(ui, &mut self.state, &summary);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.torrent_list(ui);
        });

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save_to(path) {
            tracing::error!("Failed to save config to {}: {}", path.display(), e);
        }
    }
}
