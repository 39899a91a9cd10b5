//! Session and torrent snapshots as reported by the daemon RPC layer
//!
//! Field names follow the Transmission RPC wire names. Numbers the daemon
//! omits or sends as `null` are read as zero.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::ops::Deref;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Torrent identifier assigned by the daemon
pub type TorrentId = i64;

/// Ids of the torrents currently selected in the torrent list
pub type SelectionSet = HashSet<TorrentId>;

fn nullable_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}

fn nullable_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Daemon-wide session settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SessionInfo {
    /// Daemon version string
    pub version: Option<String>,
    /// Alternative ("turtle") speed mode active
    #[serde(deserialize_with = "nullable_bool")]
    pub alt_speed_enabled: bool,
    /// Alternative download limit (KiB/s)
    #[serde(deserialize_with = "nullable_i64")]
    pub alt_speed_down: i64,
    /// Alternative upload limit (KiB/s)
    #[serde(deserialize_with = "nullable_i64")]
    pub alt_speed_up: i64,
    /// Download limit enabled
    #[serde(deserialize_with = "nullable_bool")]
    pub speed_limit_down_enabled: bool,
    /// Download limit (KiB/s)
    #[serde(deserialize_with = "nullable_i64")]
    pub speed_limit_down: i64,
    /// Upload limit enabled
    #[serde(deserialize_with = "nullable_bool")]
    pub speed_limit_up_enabled: bool,
    /// Upload limit (KiB/s)
    #[serde(deserialize_with = "nullable_i64")]
    pub speed_limit_up: i64,
    /// Free space in the default download directory (bytes)
    #[serde(deserialize_with = "nullable_i64")]
    pub download_dir_free_space: i64,
}

/// Per-torrent record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Torrent {
    /// Daemon-assigned id
    pub id: TorrentId,
    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bytes wanted once the torrent completes
    #[serde(deserialize_with = "nullable_i64")]
    pub size_when_done: i64,
    /// Verified bytes on disk
    #[serde(deserialize_with = "nullable_i64")]
    pub have_valid: i64,
    /// Current download rate (bytes/s)
    #[serde(deserialize_with = "nullable_i64")]
    pub rate_download: i64,
    /// Current upload rate (bytes/s)
    #[serde(deserialize_with = "nullable_i64")]
    pub rate_upload: i64,
}

impl Torrent {
    /// Bytes still missing, never negative
    pub fn left_until_done(&self) -> i64 {
        self.size_when_done.saturating_sub(self.have_valid).max(0)
    }

    /// Name for display, falling back to the id
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Source of snapshot revisions, shared by every [`Snapshot`] in the process
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// A value replaced wholesale on every refresh, tagged with a revision
///
/// Revisions are unique across all snapshots in the process: two snapshots
/// only share a revision when one is a clone of the other. Derived
/// computations key their caches on it.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    value: T,
    revision: u64,
}

impl<T> Snapshot<T> {
    /// Wrap an initial value under a fresh revision
    pub fn new(value: T) -> Self {
        Self {
            value,
            revision: next_revision(),
        }
    }

    /// Replace the value under a fresh revision
    pub fn replace(&mut self, value: T) {
        self.value = value;
        self.revision = next_revision();
    }

    /// Current revision
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T: Default> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

/// Snapshot loading errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Reading the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a valid snapshot
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the status bar needs from upstream, as stored in a snapshot file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSnapshot {
    /// Session settings, `null` while disconnected
    pub session: Option<SessionInfo>,
    /// Full torrent list
    pub torrents: Vec<Torrent>,
    /// Ids passing the current list filter; absent means no filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered: Option<Vec<TorrentId>>,
    /// Selected torrent ids
    pub selected: Vec<TorrentId>,
    /// Daemon host name
    pub hostname: String,
}

impl StatusSnapshot {
    /// Read a snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Torrents passing the filter, in list order
    pub fn filtered_torrents(&self) -> Vec<Torrent> {
        match &self.filtered {
            None => self.torrents.clone(),
            Some(ids) => {
                let ids: HashSet<TorrentId> = ids.iter().copied().collect();
                self.torrents
                    .iter()
                    .filter(|t| ids.contains(&t.id))
                    .cloned()
                    .collect()
            }
        }
    }

    /// Selection as a set
    pub fn selection(&self) -> SelectionSet {
        self.selected.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_wire_names() {
        let session: SessionInfo = serde_json::from_str(
            r#"{
                "version": "4.0.5 (a6fe2a64aa)",
                "alt-speed-enabled": true,
                "alt-speed-down": 100,
                "speed-limit-down-enabled": true,
                "speed-limit-down": 50,
                "download-dir-free-space": 123456
            }"#,
        )
        .unwrap();
        assert!(session.alt_speed_enabled);
        assert_eq!(session.alt_speed_down, 100);
        assert_eq!(session.speed_limit_down, 50);
        assert_eq!(session.alt_speed_up, 0);
        assert_eq!(session.download_dir_free_space, 123_456);
    }

    #[test]
    fn test_torrent_missing_and_null_numbers() {
        let torrent: Torrent =
            serde_json::from_str(r#"{"id": 7, "sizeWhenDone": null, "rateUpload": 12}"#).unwrap();
        assert_eq!(torrent.id, 7);
        assert_eq!(torrent.size_when_done, 0);
        assert_eq!(torrent.have_valid, 0);
        assert_eq!(torrent.rate_upload, 12);
    }

    #[test]
    fn test_left_until_done_never_negative() {
        let torrent = Torrent {
            size_when_done: 100,
            have_valid: 250,
            ..Default::default()
        };
        assert_eq!(torrent.left_until_done(), 0);
    }

    #[test]
    fn test_snapshot_revision() {
        let mut snap = Snapshot::new(vec![1, 2]);
        let first = snap.revision();
        snap.replace(vec![3]);
        assert_ne!(snap.revision(), first);
        assert_eq!(snap.len(), 1);

        let copy = snap.clone();
        assert_eq!(copy.revision(), snap.revision());
        assert_ne!(Snapshot::new(vec![3]).revision(), snap.revision());
        assert_ne!(Snapshot::<Vec<i32>>::default().revision(), snap.revision());
    }

    #[test]
    fn test_status_snapshot_filter() {
        let snapshot = StatusSnapshot::from_json(
            r#"{
                "session": null,
                "torrents": [{"id": 1}, {"id": 2}, {"id": 3}],
                "filtered": [3, 1],
                "selected": [2]
            }"#,
        )
        .unwrap();
        let ids: Vec<_> = snapshot.filtered_torrents().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(snapshot.selection().contains(&2));
        assert!(snapshot.session.is_none());
    }
}
