//! Status bar aggregation
//!
//! Pure recomputation of the summary numbers shown in the status bar from the
//! session snapshot, the torrent lists and the current selection. The
//! [`Aggregator`] memoizes the last result on the input revisions.

use crate::core::model::{SelectionSet, SessionInfo, Snapshot, Torrent};
use crate::i18n;
use crate::utils::format::{clamp_bytes, format_byte_rate, format_bytes};
use serde::Serialize;

/// Rate limit value meaning "no limit configured"
pub const UNSET_LIMIT: i64 = -1;

/// Effective session rate limits in KiB/s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateLimits {
    /// Download limit, [`UNSET_LIMIT`] when unlimited
    pub down: i64,
    /// Upload limit, [`UNSET_LIMIT`] when unlimited
    pub up: i64,
}

impl RateLimits {
    /// Both directions unlimited
    pub const UNSET: Self = Self {
        down: UNSET_LIMIT,
        up: UNSET_LIMIT,
    };
}

/// Resolve the effective limits: alt-speed, then the per-direction limit, then unset.
pub fn resolve_rate_limits(session: Option<&SessionInfo>) -> RateLimits {
    let Some(session) = session else {
        return RateLimits::UNSET;
    };

    if session.alt_speed_enabled {
        return RateLimits {
            down: session.alt_speed_down,
            up: session.alt_speed_up,
        };
    }

    RateLimits {
        down: if session.speed_limit_down_enabled {
            session.speed_limit_down
        } else {
            UNSET_LIMIT
        },
        up: if session.speed_limit_up_enabled {
            session.speed_limit_up
        } else {
            UNSET_LIMIT
        },
    }
}

/// Free space in the download directory, zero without a session
pub fn free_space(session: Option<&SessionInfo>) -> u64 {
    session.map_or(0, |s| clamp_bytes(s.download_dir_free_space))
}

/// Raw byte totals over the selected torrents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionTotals {
    /// Sum of `sizeWhenDone`
    pub selected: u64,
    /// Sum of `haveValid`
    pub done: u64,
    /// Sum of the per-torrent bytes left
    pub left: u64,
}

/// Sum sizes over the torrents whose id is in `selection`
pub fn selection_totals<'a, I>(torrents: I, selection: &SelectionSet) -> SelectionTotals
where
    I: IntoIterator<Item = &'a Torrent>,
{
    let (selected, done, left) = torrents
        .into_iter()
        .filter(|t| selection.contains(&t.id))
        .fold((0i64, 0i64, 0i64), |(size, have, left), t| {
            (
                size.saturating_add(t.size_when_done),
                have.saturating_add(t.have_valid),
                left.saturating_add(t.left_until_done()),
            )
        });

    SelectionTotals {
        selected: clamp_bytes(selected),
        done: clamp_bytes(done),
        left: clamp_bytes(left),
    }
}

/// Raw transfer totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransferTotals {
    /// Summed download rate (bytes/s)
    pub download: u64,
    /// Summed upload rate (bytes/s)
    pub upload: u64,
    /// Summed `sizeWhenDone` of the filtered list
    pub list_total: u64,
}

/// Sum rates over either the full list (`global`) or the filtered list.
/// The list total always covers the filtered list.
pub fn transfer_totals(torrents: &[Torrent], filtered: &[Torrent], global: bool) -> TransferTotals {
    let rate_source = if global { torrents } else { filtered };
    let (download, upload) = rate_source.iter().fold((0i64, 0i64), |(down, up), t| {
        (
            down.saturating_add(t.rate_download),
            up.saturating_add(t.rate_upload),
        )
    });
    let list_total = filtered
        .iter()
        .fold(0i64, |acc, t| acc.saturating_add(t.size_when_done));

    TransferTotals {
        download: clamp_bytes(download),
        upload: clamp_bytes(upload),
        list_total: clamp_bytes(list_total),
    }
}

/// Borrowed inputs of one summary computation
#[derive(Debug, Clone, Copy)]
pub struct StatusInputs<'a> {
    /// Session settings, `None` while disconnected
    pub session: Option<&'a SessionInfo>,
    /// Full torrent list
    pub torrents: &'a [Torrent],
    /// Torrents passing the list filter
    pub filtered: &'a [Torrent],
    /// Selected ids
    pub selection: &'a SelectionSet,
    /// Sum rates over the full list instead of the filtered list
    pub show_global_speeds: bool,
    /// Daemon host name
    pub hostname: &'a str,
}

/// Everything the status bar displays, raw and formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    /// Connection text, `"<version> at <host>"`
    pub connection: String,
    /// Formatted summed download rate (without `/s`)
    pub down_rate: String,
    /// Formatted summed upload rate (without `/s`)
    pub up_rate: String,
    /// Formatted download limit, `∞` when unset
    pub down_limit: String,
    /// Formatted upload limit, `∞` when unset
    pub up_limit: String,
    /// Formatted free space
    pub free_space: String,
    /// Formatted filtered list size
    pub size_total: String,
    /// Formatted selected size
    pub size_selected: String,
    /// Formatted selected verified bytes
    pub size_done: String,
    /// Formatted selected bytes left
    pub size_left: String,
    /// Rates were summed over the full list
    pub global_speeds: bool,
    /// Effective limits (KiB/s)
    pub rate_limits: RateLimits,
    /// Raw selection totals
    pub selection: SelectionTotals,
    /// Raw transfer totals
    pub transfer: TransferTotals,
    /// Raw free space
    pub free_space_bytes: u64,
}

fn connection_text(session: Option<&SessionInfo>, hostname: &str) -> String {
    let version = session
        .and_then(|s| s.version.clone())
        .unwrap_or_else(|| i18n::t(i18n::keys::STATUS_NOT_CONNECTED));
    rust_i18n::t!("status.connection", version = version, host = hostname).into_owned()
}

fn format_limit(limit_kib: i64) -> String {
    if limit_kib < 0 {
        format_byte_rate(limit_kib)
    } else {
        format_byte_rate(limit_kib.saturating_mul(1024))
    }
}

/// Compute the full summary. Pure apart from the active locale.
pub fn summarize(inputs: &StatusInputs<'_>) -> StatusSummary {
    let rate_limits = resolve_rate_limits(inputs.session);
    let free = free_space(inputs.session);
    let selection = selection_totals(inputs.filtered, inputs.selection);
    let transfer = transfer_totals(inputs.torrents, inputs.filtered, inputs.show_global_speeds);

    StatusSummary {
        connection: connection_text(inputs.session, inputs.hostname),
        down_rate: format_bytes(transfer.download),
        up_rate: format_bytes(transfer.upload),
        down_limit: format_limit(rate_limits.down),
        up_limit: format_limit(rate_limits.up),
        free_space: format_bytes(free),
        size_total: format_bytes(transfer.list_total),
        size_selected: format_bytes(selection.selected),
        size_done: format_bytes(selection.done),
        size_left: format_bytes(selection.left),
        global_speeds: inputs.show_global_speeds,
        rate_limits,
        selection,
        transfer,
        free_space_bytes: free,
    }
}

/// Upstream state feeding the status bar, each part replaced wholesale
#[derive(Debug, Clone, Default)]
pub struct StatusSources {
    /// Session settings
    pub session: Snapshot<Option<SessionInfo>>,
    /// Full torrent list
    pub torrents: Snapshot<Vec<Torrent>>,
    /// Filtered torrent list
    pub filtered: Snapshot<Vec<Torrent>>,
    /// Selected ids
    pub selection: Snapshot<SelectionSet>,
    /// Daemon host name
    pub hostname: Snapshot<String>,
}

impl StatusSources {
    /// Build sources from a loaded snapshot file
    pub fn from_snapshot(snapshot: &crate::core::model::StatusSnapshot) -> Self {
        let mut sources = Self::default();
        sources.apply(snapshot);
        sources
    }

    /// Replace every part from a snapshot
    pub fn apply(&mut self, snapshot: &crate::core::model::StatusSnapshot) {
        self.session.replace(snapshot.session.clone());
        self.filtered.replace(snapshot.filtered_torrents());
        self.torrents.replace(snapshot.torrents.clone());
        self.selection.replace(snapshot.selection());
        if *self.hostname != snapshot.hostname {
            self.hostname.replace(snapshot.hostname.clone());
        }
    }

    /// Borrow as summary inputs
    pub fn inputs(&self, show_global_speeds: bool) -> StatusInputs<'_> {
        StatusInputs {
            session: self.session.as_ref(),
            torrents: &self.torrents,
            filtered: &self.filtered,
            selection: &self.selection,
            show_global_speeds,
            hostname: &self.hostname,
        }
    }

    fn revisions(&self) -> [u64; 5] {
        [
            self.session.revision(),
            self.torrents.revision(),
            self.filtered.revision(),
            self.selection.revision(),
            self.hostname.revision(),
        ]
    }
}

/// Single-entry cache keyed on its inputs
#[derive(Debug)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            entry: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Return the cached value for `key`, computing it when the key changed
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        let entry = match self.entry.take() {
            Some((cached_key, value)) if cached_key == key => (cached_key, value),
            _ => {
                self.computations += 1;
                let value = compute();
                (key, value)
            }
        };
        &self.entry.insert(entry).1
    }

    /// Drop the cached value
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of times the value was computed
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SummaryKey {
    revisions: [u64; 5],
    show_global_speeds: bool,
    locale: &'static str,
}

/// Memoized [`summarize`]
#[derive(Debug, Default)]
pub struct Aggregator {
    memo: Memo<SummaryKey, StatusSummary>,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary for the current sources, recomputed only when an input changed
    pub fn summary(&mut self, sources: &StatusSources, show_global_speeds: bool) -> &StatusSummary {
        let key = SummaryKey {
            revisions: sources.revisions(),
            show_global_speeds,
            locale: i18n::get_locale().code(),
        };
        self.memo.get_or_compute(key, || {
            tracing::debug!(
                torrents = sources.torrents.len(),
                filtered = sources.filtered.len(),
                selected = sources.selection.len(),
                show_global_speeds,
                "Recomputing status summary"
            );
            summarize(&sources.inputs(show_global_speeds))
        })
    }

    /// Number of recomputations so far
    pub fn computations(&self) -> u64 {
        self.memo.computations()
    }
}
