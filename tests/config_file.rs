//! Configuration persistence through the shared handle

use statusbar_core::config::{AppConfig, ConfigHandle, ThemeMode};
use statusbar_core::core::{default_sections, SkewPolicy};
use statusbar_core::StatusBarState;

#[test]
fn edits_survive_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = ConfigHandle::new(AppConfig::default());
    {
        let mut state = StatusBarState::new(config.clone()).with_policy(SkewPolicy::FailFast);
        state.toggle_section("connection").unwrap();
        state.move_section("selection-size", 0).unwrap();
        state.set_global_speeds(true);
    }
    config.write().interface.theme = ThemeMode::Light;
    config.save_to(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("statusBarGlobalSpeeds = true"));
    assert!(text.contains("statusBarSections"));

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config.snapshot());

    let state = StatusBarState::new(ConfigHandle::new(loaded)).with_policy(SkewPolicy::FailFast);
    assert!(state.show_global_speeds());
    assert!(!state.sections().section(statusbar_core::SectionKind::Connection).unwrap().visible);
    assert_eq!(
        state.layout().unwrap()[0],
        statusbar_core::SectionKind::SelectionSize
    );
}

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(loaded, AppConfig::default());
    assert_eq!(loaded.interface.status_bar_sections, default_sections());
}

#[test]
fn skewed_file_is_reported_or_hidden() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[interface]
statusBarGlobalSpeeds = false

[[interface.statusBarSections]]
name = "connection"
visible = true
order = 0

[[interface.statusBarSections]]
name = "peers"
visible = true
order = 1
"#,
    )
    .unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.interface.status_bar_sections.len(), 2);

    let strict = StatusBarState::new(ConfigHandle::new(loaded.clone())).with_policy(SkewPolicy::FailFast);
    assert!(strict.layout().is_err());

    let lenient = StatusBarState::new(ConfigHandle::new(loaded)).with_policy(SkewPolicy::Hide);
    assert_eq!(
        lenient.layout().unwrap(),
        vec![statusbar_core::SectionKind::Connection]
    );
}

#[test]
fn invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "interface = 3").unwrap();
    assert!(AppConfig::load_from(&path).is_err());
}
