//! Status bar sections
//!
//! The persisted configuration holds an ordered list of [`Section`] records.
//! [`SectionModel`] wraps that list together with the derived name → index
//! map and implements the toggle/reorder operations driven by the context
//! menu.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Display regions compiled into the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    /// Daemon version and host
    Connection,
    /// Summed download rate and limit
    DownloadSpeed,
    /// Summed upload rate and limit
    UploadSpeed,
    /// Free space in the download directory
    FreeSpace,
    /// Size of the filtered torrent list
    ListTotalSize,
    /// Selected size, done and left
    SelectionSize,
}

impl SectionKind {
    /// All sections in canonical order
    pub const ALL: [Self; 6] = [
        Self::Connection,
        Self::DownloadSpeed,
        Self::UploadSpeed,
        Self::FreeSpace,
        Self::ListTotalSize,
        Self::SelectionSize,
    ];

    /// Stable configuration key
    pub fn key(&self) -> &'static str {
        match self {
            Self::Connection => "connection",
            Self::DownloadSpeed => "download-speed",
            Self::UploadSpeed => "upload-speed",
            Self::FreeSpace => "free-space",
            Self::ListTotalSize => "list-total-size",
            Self::SelectionSize => "selection-size",
        }
    }

    /// Parse a configuration key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Translation key of the menu label
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Connection => "section.connection",
            Self::DownloadSpeed => "section.download_speed",
            Self::UploadSpeed => "section.upload_speed",
            Self::FreeSpace => "section.free_space",
            Self::ListTotalSize => "section.list_total_size",
            Self::SelectionSize => "section.selection_size",
        }
    }

    /// Relative width of the section's slot
    pub fn flex_weight(&self) -> f32 {
        match self {
            Self::Connection | Self::SelectionSize => 20.0,
            Self::DownloadSpeed => 10.0,
            Self::UploadSpeed => 15.0,
            Self::FreeSpace | Self::ListTotalSize => 12.0,
        }
    }
}

/// One persisted display region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Configuration key, see [`SectionKind::key`]
    pub name: String,
    /// Shown in the bar
    pub visible: bool,
    /// Placement; lower comes first
    pub order: i32,
}

impl Section {
    /// Visible section with the given order
    pub fn new(kind: SectionKind, order: i32) -> Self {
        Self {
            name: kind.key().to_string(),
            visible: true,
            order,
        }
    }

    /// Compiled-in kind, `None` for names unknown to this build
    pub fn kind(&self) -> Option<SectionKind> {
        SectionKind::from_key(&self.name)
    }
}

/// Default section list: everything visible in canonical order
pub fn default_sections() -> Vec<Section> {
    SectionKind::ALL
        .iter()
        .zip(0..)
        .map(|(kind, order)| Section::new(*kind, order))
        .collect()
}

/// Section name → index into the section sequence
pub type SectionsMap = HashMap<String, usize>;

/// Build the name → index map. The first entry wins on duplicate names.
pub fn sections_map(sections: &[Section]) -> SectionsMap {
    let mut map = SectionsMap::with_capacity(sections.len());
    for (index, section) in sections.iter().enumerate() {
        if map.contains_key(&section.name) {
            tracing::warn!(name = %section.name, index, "Duplicate status bar section ignored");
            continue;
        }
        map.insert(section.name.clone(), index);
    }
    map
}

/// Section lookup and edit errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SectionError {
    /// Name not present in the section list
    #[error("Unknown status bar section: {0}")]
    UnknownSection(String),
    /// Target position past the end of the list
    #[error("Section position {position} out of range (0..{len})")]
    PositionOutOfRange {
        /// Requested position
        position: usize,
        /// Number of sections
        len: usize,
    },
}

/// What to do when a compiled-in section is missing from the persisted list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkewPolicy {
    /// Report the missing section as an error
    FailFast,
    /// Log a warning and leave the section out
    Hide,
}

impl SkewPolicy {
    /// `FailFast` in debug builds, `Hide` in release builds
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::FailFast
        } else {
            Self::Hide
        }
    }
}

impl Default for SkewPolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

/// Ordered section list with its derived name map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionModel {
    sections: Vec<Section>,
    map: SectionsMap,
    missing: Vec<SectionKind>,
}

impl Default for SectionModel {
    fn default() -> Self {
        Self::new(default_sections())
    }
}

impl SectionModel {
    /// Wrap a persisted section list
    pub fn new(sections: Vec<Section>) -> Self {
        for section in sections.iter().filter(|s| s.kind().is_none()) {
            tracing::info!(name = %section.name, "Keeping status bar section unknown to this build");
        }
        let mut model = Self {
            sections,
            map: SectionsMap::new(),
            missing: Vec::new(),
        };
        model.rebuild_map();
        model
    }

    /// Sections in storage order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Derived name map
    pub fn map(&self) -> &SectionsMap {
        &self.map
    }

    /// Compiled-in kinds absent from the persisted list
    pub fn missing(&self) -> &[SectionKind] {
        &self.missing
    }

    /// Index of the named section
    pub fn lookup(&self, name: &str) -> Result<usize, SectionError> {
        self.map
            .get(name)
            .copied()
            .ok_or_else(|| SectionError::UnknownSection(name.to_string()))
    }

    /// The section of a compiled-in kind
    pub fn section(&self, kind: SectionKind) -> Result<&Section, SectionError> {
        let index = self.lookup(kind.key())?;
        Ok(&self.sections[index])
    }

    /// Flip visibility; returns the new state
    pub fn toggle(&mut self, name: &str) -> Result<bool, SectionError> {
        let index = self.lookup(name)?;
        let section = &mut self.sections[index];
        section.visible = !section.visible;
        tracing::debug!(name, visible = section.visible, "Toggled status bar section");
        Ok(section.visible)
    }

    /// Set visibility explicitly
    pub fn set_visible(&mut self, name: &str, visible: bool) -> Result<(), SectionError> {
        let index = self.lookup(name)?;
        self.sections[index].visible = visible;
        Ok(())
    }

    /// Assign a raw order value
    pub fn set_order(&mut self, name: &str, order: i32) -> Result<(), SectionError> {
        let index = self.lookup(name)?;
        self.sections[index].order = order;
        self.rebuild_map();
        Ok(())
    }

    /// Move a section to `position` in display order and renumber all orders
    pub fn move_section(&mut self, name: &str, position: usize) -> Result<(), SectionError> {
        let index = self.lookup(name)?;
        let mut display = self.display_order();
        if position >= display.len() {
            return Err(SectionError::PositionOutOfRange {
                position,
                len: display.len(),
            });
        }
        display.retain(|&i| i != index);
        display.insert(position, index);
        for (order, i) in (0..).zip(display) {
            self.sections[i].order = order;
        }
        self.rebuild_map();
        tracing::debug!(name, position, "Moved status bar section");
        Ok(())
    }

    /// Position of the named section in display order
    pub fn display_position(&self, name: &str) -> Result<usize, SectionError> {
        let index = self.lookup(name)?;
        Ok(self
            .display_order()
            .iter()
            .position(|&i| i == index)
            .unwrap_or(0))
    }

    /// Restore the default section list
    pub fn reset(&mut self) {
        self.sections = default_sections();
        self.rebuild_map();
    }

    /// Indices sorted by `order`, storage position breaking ties
    pub fn display_order(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.sections.len()).collect();
        indices.sort_by_key(|&i| (self.sections[i].order, i));
        indices
    }

    /// Visible compiled-in sections in display order
    ///
    /// Every compiled-in kind must be present in the persisted list; a
    /// missing one is handled according to `policy`. Called once per frame,
    /// so it does not log: the skew is reported when the list changes.
    pub fn visible_kinds(&self, policy: SkewPolicy) -> Result<Vec<SectionKind>, SectionError> {
        if let (SkewPolicy::FailFast, Some(kind)) = (policy, self.missing.first()) {
            return Err(SectionError::UnknownSection(kind.key().to_string()));
        }

        Ok(self
            .display_order()
            .into_iter()
            .filter(|&i| self.map.get(&self.sections[i].name) == Some(&i))
            .map(|i| &self.sections[i])
            .filter(|s| s.visible)
            .filter_map(Section::kind)
            .collect())
    }

    fn rebuild_map(&mut self) {
        self.map = sections_map(&self.sections);
        let missing: Vec<SectionKind> = SectionKind::ALL
            .into_iter()
            .filter(|kind| !self.map.contains_key(kind.key()))
            .collect();
        if missing != self.missing {
            for kind in &missing {
                tracing::warn!(section = kind.key(), "Status bar section missing from configuration");
            }
            self.missing = missing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn orders(model: &SectionModel) -> Vec<i32> {
        model.sections().iter().map(|s| s.order).collect()
    }

    #[test]
    fn test_default_sections() {
        let model = SectionModel::default();
        assert_eq!(model.sections().len(), 6);
        assert_eq!(model.map().len(), 6);
        for kind in SectionKind::ALL {
            assert!(model.section(kind).unwrap().visible);
        }
    }

    #[test]
    fn test_key_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(SectionKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(SectionKind::from_key("bogus"), None);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut model = SectionModel::default();
        model.set_order("free-space", 42).unwrap();
        let before = model.clone();

        assert!(!model.toggle("free-space").unwrap());
        assert_eq!(orders(&model), orders(&before));
        assert!(model.toggle("free-space").unwrap());
        assert_eq!(model, before);
    }

    #[test]
    fn test_unknown_name_fails() {
        let mut model = SectionModel::default();
        assert_eq!(
            model.toggle("nope"),
            Err(SectionError::UnknownSection("nope".to_string()))
        );
        assert!(model.lookup("nope").is_err());
    }

    #[test]
    fn test_move_section_renumbers() {
        let mut model = SectionModel::default();
        model.move_section("selection-size", 0).unwrap();
        let kinds = model.visible_kinds(SkewPolicy::FailFast).unwrap();
        assert_eq!(kinds[0], SectionKind::SelectionSize);
        assert_eq!(kinds[1], SectionKind::Connection);
        assert_eq!(model.section(SectionKind::SelectionSize).unwrap().order, 0);
        assert_eq!(model.display_position("connection").unwrap(), 1);
        // Storage position is untouched; only order values change.
        assert_eq!(model.lookup("selection-size").unwrap(), 5);
    }

    #[test]
    fn test_move_out_of_range() {
        let mut model = SectionModel::default();
        assert_eq!(
            model.move_section("connection", 6),
            Err(SectionError::PositionOutOfRange { position: 6, len: 6 })
        );
    }

    #[test]
    fn test_visible_kinds_follow_order_not_position() {
        let mut sections = default_sections();
        sections[0].order = 10;
        sections[2].visible = false;
        let model = SectionModel::new(sections);
        let kinds = model.visible_kinds(SkewPolicy::FailFast).unwrap();
        assert_eq!(
            kinds,
            vec![
                SectionKind::DownloadSpeed,
                SectionKind::FreeSpace,
                SectionKind::ListTotalSize,
                SectionKind::SelectionSize,
                SectionKind::Connection,
            ]
        );
    }

    #[test]
    fn test_missing_section_policy() {
        let mut sections = default_sections();
        sections.retain(|s| s.name != "free-space");
        let model = SectionModel::new(sections);

        assert_eq!(
            model.visible_kinds(SkewPolicy::FailFast),
            Err(SectionError::UnknownSection("free-space".to_string()))
        );
        let kinds = model.visible_kinds(SkewPolicy::Hide).unwrap();
        assert_eq!(kinds.len(), 5);
        assert!(!kinds.contains(&SectionKind::FreeSpace));
    }

    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
            if *event.metadata().level() <= tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_missing_section_logged_once() {
        use tracing_subscriber::prelude::*;

        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(WarnCounter(count.clone()));
        tracing::subscriber::with_default(subscriber, || {
            let mut sections = default_sections();
            sections.retain(|s| s.name != "free-space");
            let mut model = SectionModel::new(sections);
            assert_eq!(model.missing(), &[SectionKind::FreeSpace]);

            for _ in 0..100 {
                assert_eq!(model.visible_kinds(SkewPolicy::Hide).unwrap().len(), 5);
                assert!(model.visible_kinds(SkewPolicy::FailFast).is_err());
            }
            model.toggle("connection").unwrap();
            model.move_section("connection", 2).unwrap();
            assert_eq!(count.load(Ordering::SeqCst), 1);

            model.reset();
            assert!(model.missing().is_empty());
            assert_eq!(count.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_unknown_persisted_names_are_kept_but_not_rendered() {
        let mut sections = default_sections();
        sections.push(Section {
            name: "peers".to_string(),
            visible: true,
            order: 3,
        });
        let model = SectionModel::new(sections);
        assert_eq!(model.sections().len(), 7);
        assert_eq!(model.visible_kinds(SkewPolicy::FailFast).unwrap().len(), 6);
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let mut sections = default_sections();
        sections.push(Section {
            name: "connection".to_string(),
            visible: true,
            order: -1,
        });
        let model = SectionModel::new(sections);
        assert_eq!(model.lookup("connection").unwrap(), 0);
        let kinds = model.visible_kinds(SkewPolicy::FailFast).unwrap();
        assert_eq!(kinds.iter().filter(|k| **k == SectionKind::Connection).count(), 1);
    }

    #[test]
    fn test_reset() {
        let mut model = SectionModel::new(Vec::new());
        model.reset();
        assert_eq!(model, SectionModel::default());
    }
}
