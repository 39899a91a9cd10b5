//! Status bar state
//!
//! Ties the section model, the global-speeds flag, the aggregator and the
//! title updater to an injected [`ConfigHandle`]. Every edit is written back
//! into the shared configuration immediately.

use crate::config::ConfigHandle;
use crate::core::aggregate::{Aggregator, StatusSources, StatusSummary};
use crate::core::sections::{SectionError, SectionKind, SectionModel, SkewPolicy};
use crate::core::title::{TitleSink, TitleUpdater};

/// Status bar component state
#[derive(Debug)]
pub struct StatusBarState {
    config: ConfigHandle,
    sections: SectionModel,
    show_global_speeds: bool,
    policy: SkewPolicy,
    aggregator: Aggregator,
    title: TitleUpdater,
}

impl StatusBarState {
    /// Read the persisted status bar settings from `config`
    pub fn new(config: ConfigHandle) -> Self {
        let (sections, show_global_speeds) = {
            let cfg = config.read();
            (
                cfg.interface.status_bar_sections.clone(),
                cfg.interface.status_bar_global_speeds,
            )
        };

        Self {
            config,
            sections: SectionModel::new(sections),
            show_global_speeds,
            policy: SkewPolicy::for_build(),
            aggregator: Aggregator::new(),
            title: TitleUpdater::new(),
        }
    }

    /// Override the section skew policy
    #[must_use]
    pub fn with_policy(mut self, policy: SkewPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Section model
    pub fn sections(&self) -> &SectionModel {
        &self.sections
    }

    /// Rates are summed over all torrents
    pub fn show_global_speeds(&self) -> bool {
        self.show_global_speeds
    }

    /// Flip the global speeds flag
    pub fn toggle_global_speeds(&mut self) -> bool {
        self.set_global_speeds(!self.show_global_speeds);
        self.show_global_speeds
    }

    /// Set the global speeds flag
    pub fn set_global_speeds(&mut self, enabled: bool) {
        self.show_global_speeds = enabled;
        self.config.write().interface.status_bar_global_speeds = enabled;
    }

    /// Flip a section's visibility; returns the new state
    pub fn toggle_section(&mut self, name: &str) -> Result<bool, SectionError> {
        let visible = self.sections.toggle(name)?;
        self.persist_sections();
        Ok(visible)
    }

    /// Show or hide a section
    pub fn set_section_visible(&mut self, name: &str, visible: bool) -> Result<(), SectionError> {
        self.sections.set_visible(name, visible)?;
        self.persist_sections();
        Ok(())
    }

    /// Move a section to a display position
    pub fn move_section(&mut self, name: &str, position: usize) -> Result<(), SectionError> {
        self.sections.move_section(name, position)?;
        self.persist_sections();
        Ok(())
    }

    /// Move a section one step earlier (`-1`) or later (`1`) in display order
    pub fn shift_section(&mut self, name: &str, step: isize) -> Result<(), SectionError> {
        let current = self.sections.display_position(name)?;
        let last = self.sections.sections().len().saturating_sub(1);
        let target = current.saturating_add_signed(step).min(last);
        if target != current {
            self.move_section(name, target)?;
        }
        Ok(())
    }

    /// Restore the default sections
    pub fn reset_sections(&mut self) {
        self.sections.reset();
        self.persist_sections();
    }

    /// Visible sections in display order, per the skew policy
    pub fn layout(&self) -> Result<Vec<SectionKind>, SectionError> {
        self.sections.visible_kinds(self.policy)
    }

    /// Current summary (memoized)
    pub fn summary(&mut self, sources: &StatusSources) -> &StatusSummary {
        self.aggregator.summary(sources, self.show_global_speeds)
    }

    /// Current summary, pushing the rate titles into `sink` when they changed
    pub fn refresh(&mut self, sources: &StatusSources, sink: &mut dyn TitleSink) -> &StatusSummary {
        let server_name = self.config.read().server.name.clone();
        let summary = self.aggregator.summary(sources, self.show_global_speeds);
        self.title
            .update(&summary.down_rate, &summary.up_rate, &server_name, sink);
        summary
    }

    fn persist_sections(&self) {
        self.config.write().interface.status_bar_sections = self.sections.sections().to_vec();
    }
}
