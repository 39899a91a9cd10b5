//! # Torrent Statusbar Core Library
//!
//! Status bar logic for a remote GUI of a Transmission-style torrent daemon:
//! - Transfer rate, rate limit and free space summaries
//! - Filtered list and selection size totals
//! - Configurable, reorderable display sections
//! - Window title updates through an output port
//!
//! ## Example
//!
//! ```rust,no_run
//! use statusbar_core::{AppConfig, ConfigError, ConfigHandle, StatusBarState, StatusSnapshot, StatusSources};
//!
//! fn main() -> anyhow::Result<()> {
//!     let path = statusbar_core::config::config_file().ok_or(ConfigError::NoConfigDir)?;
//!     let config = ConfigHandle::new(AppConfig::load_from(&path)?);
//!     let snapshot = StatusSnapshot::load("snapshot.json".as_ref())?;
//!     let sources = StatusSources::from_snapshot(&snapshot);
//!
//!     let mut state = StatusBarState::new(config);
//!     let kinds = state.layout()?;
//!     let summary = state.summary(&sources).clone();
//!     for kind in kinds {
//!         println!("{}", statusbar_core::section_text(kind, &summary));
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Initialize i18n - load translations from i18n folder (TOML)
rust_i18n::i18n!("i18n", fallback = "en");

pub mod cli;
pub mod config;
pub mod core;
pub mod i18n;
pub mod utils;

// Re-exports for convenience
pub use crate::cli::{CliResult, ExitCodes, OutputFormat};
pub use crate::config::{AppConfig, ConfigError, ConfigHandle};
pub use crate::core::{
    section_text, SectionError, SectionKind, SectionModel, SessionInfo, SkewPolicy,
    StatusBarState, StatusSnapshot, StatusSources, StatusSummary, TitleSink, Torrent,
};
pub use crate::i18n::{get_locale, set_locale, t, Locale};
pub use crate::utils::{format_byte_rate, format_bytes};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
