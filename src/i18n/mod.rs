//! Internationalization (i18n) module
//!
//! Provides multi-language support for the application.
//! Currently supports:
//! - English (en)
//! - Simplified Chinese (zh-CN)

use parking_lot::RwLock;
use std::sync::LazyLock;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (default)
    #[default]
    English,
    /// Simplified Chinese
    SimplifiedChinese,
}

impl Locale {
    /// Get locale code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::SimplifiedChinese => "zh-CN",
        }
    }

    /// Parse from string
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::English),
            "zh" | "zh-cn" | "zh-hans" => Some(Self::SimplifiedChinese),
            _ => None,
        }
    }

    /// Get all available locales
    pub fn available() -> &'static [Self] {
        &[Self::English, Self::SimplifiedChinese]
    }
}

/// Current locale
static CURRENT_LOCALE: LazyLock<RwLock<Locale>> = LazyLock::new(|| RwLock::new(Locale::English));

/// Get current locale
pub fn get_locale() -> Locale {
    *CURRENT_LOCALE.read()
}

/// Set current locale
pub fn set_locale(locale: Locale) {
    *CURRENT_LOCALE.write() = locale;
    rust_i18n::set_locale(locale.code());
}

/// Translate a key using rust-i18n
///
/// This is a wrapper around the `rust_i18n::t!` macro for keys known only at
/// runtime. Strings with placeholders use the macro directly.
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translation keys for the application
pub mod keys {
    // Status bar
    /// Connection text while no session is known
    pub const STATUS_NOT_CONNECTED: &str = "status.not_connected";
    /// Prefix of the section layout error label
    pub const STATUS_ERROR: &str = "status.error";

    // Context menu
    /// Global speeds checkbox
    pub const MENU_SHOW_GLOBAL_SPEEDS: &str = "menu.show_global_speeds";
    /// Move section left
    pub const MENU_MOVE_EARLIER: &str = "menu.move_earlier";
    /// Move section right
    pub const MENU_MOVE_LATER: &str = "menu.move_later";
    /// Restore default sections
    pub const MENU_RESET_SECTIONS: &str = "menu.reset_sections";

    // Utility buttons
    /// Theme button tooltip
    pub const TOGGLE_THEME: &str = "toggle.theme";
    /// Font size button tooltip
    pub const TOGGLE_FONT_SIZE: &str = "toggle.font_size";
    /// About window title
    pub const ABOUT_TITLE: &str = "about.title";

    // Host window
    /// Torrent list filter label
    pub const LIST_FILTER: &str = "list.filter";
    /// Shown when the filtered list is empty
    pub const LIST_EMPTY: &str = "list.empty";
}
