use missionctl::icons::{IconService, IconTheme};

#[test]
fn test_ascii_theme_is_pure_ascii() {
    let icons = IconService::new(IconTheme::Ascii).icons();
    let glyphs = [
        icons.agent_status.active,
        icons.agent_status.idle,
        icons.agent_status.blocked,
        icons.document.spec,
        icons.document.api,
        icons.document.design,
        icons.document.notes,
        icons.document.guide,
        icons.priority.high,
        icons.priority.medium,
        icons.priority.low,
        icons.ui.activity,
        icons.ui.error,
        icons.ui.skeleton,
    ];
    for glyph in glyphs {
        assert!(glyph.is_ascii(), "'{}' is not ASCII", glyph);
    }
}

#[test]
fn test_every_theme_provides_every_glyph() {
    for theme in [IconTheme::Emoji, IconTheme::Unicode, IconTheme::Ascii] {
        let service = IconService::new(theme);
        assert!(!service.agent_active().is_empty());
        assert!(!service.agent_idle().is_empty());
        assert!(!service.agent_blocked().is_empty());
        assert!(!service.doc_spec().is_empty());
        assert!(!service.doc_api().is_empty());
        assert!(!service.doc_design().is_empty());
        assert!(!service.doc_notes().is_empty());
        assert!(!service.doc_guide().is_empty());
        assert!(!service.priority_high().is_empty());
        assert!(!service.priority_medium().is_empty());
        assert!(!service.priority_low().is_empty());
        assert!(!service.activity().is_empty());
        assert!(!service.error().is_empty());
        assert!(!service.skeleton().is_empty());
    }
}

#[test]
fn test_icon_theme_parses_from_config_strings() {
    for (name, expected) in [
        ("\"emoji\"", IconTheme::Emoji),
        ("\"unicode\"", IconTheme::Unicode),
        ("\"ascii\"", IconTheme::Ascii),
    ] {
        let parsed: IconTheme = serde_json::from_str(name).unwrap();
        assert_eq!(parsed, expected);
    }
    assert!(serde_json::from_str::<IconTheme>("\"nerdfont\"").is_err());
}

#[test]
fn test_agent_status_glyphs_are_distinct_within_a_theme() {
    for theme in [IconTheme::Emoji, IconTheme::Unicode, IconTheme::Ascii] {
        let icons = IconService::new(theme).icons();
        assert_ne!(icons.agent_status.active, icons.agent_status.idle);
        assert_ne!(icons.agent_status.active, icons.agent_status.blocked);
        assert_ne!(icons.agent_status.idle, icons.agent_status.blocked);
    }
}
