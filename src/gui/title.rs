//! Title output port backed by the egui viewport
//!
//! A native window has a single title, so the document title only reaches the
//! viewport on the web, where it is the browser tab title.

use egui::{Context, ViewportCommand};
use statusbar_core::core::{TitleError, TitleSink};

/// Sends title updates to the root viewport
pub struct ViewportTitle {
    ctx: Context,
    native: bool,
}

impl ViewportTitle {
    pub fn new(ctx: Context) -> Self {
        Self::with_native(ctx, !cfg!(target_arch = "wasm32"))
    }

    fn with_native(ctx: Context, native: bool) -> Self {
        Self { ctx, native }
    }

    fn send(&self, title: &str) {
        self.ctx.send_viewport_cmd(ViewportCommand::Title(title.to_string()));
    }
}

impl TitleSink for ViewportTitle {
    fn set_document_title(&mut self, title: &str) {
        if !self.native {
            self.send(title);
        }
    }

    fn has_native_window(&self) -> bool {
        self.native
    }

    fn set_window_title(&mut self, title: &str) -> Result<(), TitleError> {
        self.send(title);
        Ok(())
    }
}
