//! Core status bar logic
//!
//! Data model, aggregation, section bookkeeping and title updates. Nothing in
//! here depends on the GUI toolkit.

pub mod aggregate;
pub mod model;
pub mod sections;
pub mod statusbar;
pub mod title;

pub use aggregate::{
    free_space, resolve_rate_limits, selection_totals, summarize, transfer_totals, Aggregator,
    Memo, RateLimits, SelectionTotals, StatusInputs, StatusSources, StatusSummary, TransferTotals,
    UNSET_LIMIT,
};
pub use model::{
    SelectionSet, SessionInfo, Snapshot, SnapshotError, StatusSnapshot, Torrent, TorrentId,
};
pub use sections::{
    default_sections, sections_map, Section, SectionError, SectionKind, SectionModel,
    SectionsMap, SkewPolicy,
};
pub use statusbar::StatusBarState;
pub use title::{TitleError, TitleSink, TitleUpdater};

/// Display text of a section
///
/// Rate sections get their `/s` suffix and limit here; the GUI adds icons.
pub fn section_text(kind: SectionKind, summary: &StatusSummary) -> String {
    match kind {
        SectionKind::Connection => summary.connection.clone(),
        SectionKind::DownloadSpeed => {
            rust_i18n::t!("status.rate", rate = summary.down_rate, limit = summary.down_limit)
                .into_owned()
        }
        SectionKind::UploadSpeed => {
            rust_i18n::t!("status.rate", rate = summary.up_rate, limit = summary.up_limit)
                .into_owned()
        }
        SectionKind::FreeSpace => {
            rust_i18n::t!("status.free_space", size = summary.free_space).into_owned()
        }
        SectionKind::ListTotalSize => {
            rust_i18n::t!("status.list_total", size = summary.size_total).into_owned()
        }
        SectionKind::SelectionSize => rust_i18n::t!(
            "status.selection",
            size = summary.size_selected,
            done = summary.size_done,
            left = summary.size_left
        )
        .into_owned(),
    }
}
