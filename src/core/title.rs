//! Window title updates
//!
//! Pushes the transfer-rate summary into the document title and, when the
//! app runs inside a native shell, the native window title.

use thiserror::Error;

/// Short application name used in the document title
pub const APP_NAME: &str = "Torrent Statusbar";

/// Long application name used in the native window title
pub const APP_LONG_NAME: &str = "Transmission remote GUI";

/// Window title errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    /// No native window to title
    #[error("Native window unavailable")]
    Unavailable,
    /// The window shell rejected the title
    #[error("Failed to set window title: {0}")]
    Failed(String),
}

/// Output port for title updates
#[cfg_attr(test, mockall::automock)]
pub trait TitleSink {
    /// Set the document (tab/taskbar) title
    fn set_document_title(&mut self, title: &str);

    /// Whether a native window shell is present
    fn has_native_window(&self) -> bool;

    /// Set the native window title
    fn set_window_title(&mut self, title: &str) -> Result<(), TitleError>;
}

/// `"↓<down>/s ↑<up>/s"`
pub fn speeds_text(down: &str, up: &str) -> String {
    format!("↓{}/s ↑{}/s", down, up)
}

/// Document title for the given rates
pub fn document_title(down: &str, up: &str) -> String {
    format!("{} - {}", speeds_text(down, up), APP_NAME)
}

/// Native window title for the given server and rates
pub fn window_title(server_name: &str, down: &str, up: &str) -> String {
    format!("{} - {} ({})", APP_LONG_NAME, server_name, speeds_text(down, up))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TitleKey {
    down: String,
    up: String,
    server_name: String,
}

/// Pushes titles when the displayed rates or the server name change
#[derive(Debug, Default)]
pub struct TitleUpdater {
    last: Option<TitleKey>,
}

impl TitleUpdater {
    /// Create an updater that pushes on the first call
    pub fn new() -> Self {
        Self::default()
    }

    /// Push titles if anything changed since the last push.
    /// Returns whether the sink was called.
    pub fn update(&mut self, down: &str, up: &str, server_name: &str, sink: &mut dyn TitleSink) -> bool {
        let key = TitleKey {
            down: down.to_string(),
            up: up.to_string(),
            server_name: server_name.to_string(),
        };
        if self.last.as_ref() == Some(&key) {
            return false;
        }

        sink.set_document_title(&document_title(down, up));
        if sink.has_native_window() {
            if let Err(e) = sink.set_window_title(&window_title(server_name, down, up)) {
                tracing::debug!("Ignoring window title failure: {}", e);
            }
        }

        self.last = Some(key);
        true
    }

    /// Force the next update to push
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_title_formats() {
        assert_eq!(speeds_text("1.00 KiB", "0 B"), "↓1.00 KiB/s ↑0 B/s");
        assert_eq!(
            document_title("1.00 KiB", "0 B"),
            "↓1.00 KiB/s ↑0 B/s - Torrent Statusbar"
        );
        assert_eq!(
            window_title("home", "1.00 KiB", "0 B"),
            "Transmission remote GUI - home (↓1.00 KiB/s ↑0 B/s)"
        );
    }

    #[test]
    fn test_pushes_only_on_change() {
        let mut sink = MockTitleSink::new();
        sink.expect_set_document_title()
            .with(eq("↓1 B/s ↑2 B/s - Torrent Statusbar"))
            .times(1)
            .return_const(());
        sink.expect_has_native_window().return_const(false);
        sink.expect_set_window_title().never();

        let mut updater = TitleUpdater::new();
        assert!(updater.update("1 B", "2 B", "srv", &mut sink));
        assert!(!updater.update("1 B", "2 B", "srv", &mut sink));
    }

    #[test]
    fn test_window_title_failure_is_swallowed() {
        let mut sink = MockTitleSink::new();
        sink.expect_set_document_title().times(2).return_const(());
        sink.expect_has_native_window().return_const(true);
        sink.expect_set_window_title()
            .times(2)
            .returning(|_| Err(TitleError::Unavailable));

        let mut updater = TitleUpdater::new();
        assert!(updater.update("1 B", "2 B", "srv", &mut sink));
        assert!(updater.update("3 B", "2 B", "srv", &mut sink));
    }

    #[test]
    fn test_server_rename_pushes() {
        let mut sink = MockTitleSink::new();
        sink.expect_set_document_title().times(3).return_const(());
        sink.expect_has_native_window().return_const(true);
        sink.expect_set_window_title()
            .with(eq("Transmission remote GUI - b (↓1 B/s ↑2 B/s)"))
            .times(2)
            .returning(|_| Ok(()));
        sink.expect_set_window_title()
            .with(eq("Transmission remote GUI - a (↓1 B/s ↑2 B/s)"))
            .times(1)
            .returning(|_| Ok(()));

        let mut updater = TitleUpdater::new();
        updater.update("1 B", "2 B", "a", &mut sink);
        updater.update("1 B", "2 B", "b", &mut sink);
        updater.reset();
        updater.update("1 B", "2 B", "b", &mut sink);
    }
}
