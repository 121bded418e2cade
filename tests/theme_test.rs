use missionctl::theme::{self, Theme};

#[test]
fn test_toggle_flips_both_ways() {
    assert_eq!(Theme::Dark.toggle(), Theme::Light);
    assert_eq!(Theme::Light.toggle(), Theme::Dark);
    assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
}

#[test]
fn test_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn test_store_and_load_round_trip() {
    let path = std::env::temp_dir().join(format!("missionctl-theme-test-{}.toml", std::process::id()));

    theme::store_to(Theme::Light, &path).unwrap();
    assert_eq!(theme::load_from(&path), Theme::Light);

    theme::store_to(Theme::Dark, &path).unwrap();
    assert_eq!(theme::load_from(&path), Theme::Dark);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_state_file_falls_back_to_default() {
    let path = std::env::temp_dir().join("missionctl-theme-test-does-not-exist.toml");
    assert_eq!(theme::load_from(path), Theme::default());
}

#[test]
fn test_corrupt_state_file_falls_back_to_default() {
    let path = std::env::temp_dir().join(format!("missionctl-theme-corrupt-{}.toml", std::process::id()));
    std::fs::write(&path, "theme = \"mauve\"").unwrap();
    assert_eq!(theme::load_from(&path), Theme::default());
    std::fs::remove_file(&path).ok();
}

#[test]
fn test_accent_colors_differ_per_theme() {
    assert_ne!(Theme::Dark.accent(), Theme::Light.accent());
}
