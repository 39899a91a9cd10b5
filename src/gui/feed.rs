//! Snapshot sources for the host window
//!
//! Either a JSON snapshot file re-read when it changes on disk, or a
//! randomized demo swarm running on a background thread.

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use rand::Rng;
use statusbar_core::core::{SessionInfo, StatusSnapshot, Torrent};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, SystemTime};

const DEMO_TICK: Duration = Duration::from_secs(1);

/// Where snapshots come from
pub enum Feed {
    /// JSON snapshot file
    File {
        path: PathBuf,
        modified: Option<SystemTime>,
    },
    /// Background demo generator
    Demo { rx: Receiver<StatusSnapshot> },
}

impl Feed {
    /// Watch a snapshot file
    pub fn file(path: PathBuf) -> Self {
        Self::File { path, modified: None }
    }

    /// Start the demo generator
    pub fn demo() -> Self {
        let (tx, rx) = crossbeam_channel::bounded(4);
        if let Err(e) = thread::Builder::new()
            .name("demo-feed".to_string())
            .spawn(move || demo_loop(&tx))
        {
            tracing::error!("Failed to start demo feed: {}", e);
        }
        Self::Demo { rx }
    }

    /// Newest snapshot since the last poll, if any
    pub fn poll(&mut self) -> Option<StatusSnapshot> {
        match self {
            Self::File { path, modified } => {
                let current = std::fs::metadata(&*path).and_then(|m| m.modified()).ok();
                if current.is_none() || current == *modified {
                    return None;
                }
                *modified = current;
                match StatusSnapshot::load(path) {
                    Ok(snapshot) => Some(snapshot),
                    Err(e) => {
                        tracing::warn!("Failed to load snapshot {}: {}", path.display(), e);
                        None
                    }
                }
            }
            Self::Demo { rx } => {
                let mut latest = None;
                loop {
                    match rx.try_recv() {
                        Ok(snapshot) => latest = Some(snapshot),
                        Err(TryRecvError::Empty) => break,
                        Err(TryRecvError::Disconnected) => {
                            tracing::debug!("Demo feed stopped");
                            break;
                        }
                    }
                }
                latest
            }
        }
    }
}

fn demo_loop(tx: &Sender<StatusSnapshot>) {
    let mut rng = rand::thread_rng();
    let mut swarm = DemoSwarm::new(&mut rng);
    loop {
        if tx.send(swarm.tick(&mut rng)).is_err() {
            break;
        }
        thread::sleep(DEMO_TICK);
    }
}

/// Randomized torrents that slowly complete
struct DemoSwarm {
    session: SessionInfo,
    torrents: Vec<Torrent>,
}

impl DemoSwarm {
    fn new(rng: &mut impl Rng) -> Self {
        let names = [
            "debian-12.5.0-amd64-netinst.iso",
            "ubuntu-24.04-desktop-amd64.iso",
            "archlinux-2024.05.01-x86_64.iso",
            "Fedora-Workstation-Live-x86_64-40.iso",
            "big_buck_bunny_1080p.mkv",
            "sintel-4k.mkv",
            "wikipedia-en-2024-05.zim",
            "blender-4.1.1-linux-x64.tar.xz",
        ];
        let torrents = names
            .iter()
            .zip(1..)
            .map(|(name, id)| {
                let size = rng.gen_range(200..8_000) * 1024 * 1024;
                Torrent {
                    id,
                    name: Some((*name).to_string()),
                    size_when_done: size,
                    have_valid: if rng.gen_bool(0.3) { size } else { rng.gen_range(0..size) },
                    ..Default::default()
                }
            })
            .collect();

        let session = SessionInfo {
            version: Some("4.0.6 (38c164933e)".to_string()),
            speed_limit_down_enabled: true,
            speed_limit_down: 10_240,
            alt_speed_down: 512,
            alt_speed_up: 128,
            download_dir_free_space: 512 * 1024 * 1024 * 1024,
            ..Default::default()
        };

        Self { session, torrents }
    }

    fn tick(&mut self, rng: &mut impl Rng) -> StatusSnapshot {
        if rng.gen_bool(0.05) {
            self.session.alt_speed_enabled = !self.session.alt_speed_enabled;
        }

        let mut downloaded = 0;
        for torrent in &mut self.torrents {
            let left = torrent.left_until_done();
            torrent.rate_download = if left > 0 {
                rng.gen_range(0..4 * 1024 * 1024).min(left)
            } else {
                0
            };
            torrent.rate_upload = rng.gen_range(0..512 * 1024);
            torrent.have_valid += torrent.rate_download;
            downloaded += torrent.rate_download;
        }
        self.session.download_dir_free_space =
            (self.session.download_dir_free_space - downloaded).max(0);

        StatusSnapshot {
            session: Some(self.session.clone()),
            torrents: self.torrents.clone(),
            filtered: None,
            selected: Vec::new(),
            hostname: "localhost".to_string(),
        }
    }
}
