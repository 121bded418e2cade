use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use missionctl::commands::{self, CommandAction};
use missionctl::theme::Theme;
use missionctl::ui::components::CommandPalette;
use missionctl::ui::core::actions::{Action, View};
use missionctl::ui::core::Component;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(palette: &mut CommandPalette, text: &str) {
    for c in text.chars() {
        palette.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_open_resets_query_and_selection() {
    let mut palette = CommandPalette::new(Theme::Dark);
    type_str(&mut palette, "agent");
    palette.handle_key_events(key(KeyCode::Down));
    palette.open();
    assert_eq!(palette.query, "");
    assert_eq!(palette.selected, 0);
    assert_eq!(palette.filtered.len(), commands::REGISTRY.len());
}

#[test]
fn test_typing_refilters_on_every_keystroke() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    type_str(&mut palette, "go");
    let after_go = palette.filtered.len();
    assert!(after_go >= 5);
    type_str(&mut palette, " to task");
    assert_eq!(palette.filtered.len(), 1);
}

#[test]
fn test_keystroke_resets_selection_to_top() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    palette.handle_key_events(key(KeyCode::Down));
    palette.handle_key_events(key(KeyCode::Down));
    assert_eq!(palette.selected, 2);
    type_str(&mut palette, "g");
    assert_eq!(palette.selected, 0);
}

#[test]
fn test_down_wraps_modulo_result_count() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    let k = palette.filtered.len();
    for _ in 0..3 {
        palette.handle_key_events(key(KeyCode::Down));
    }
    assert_eq!(palette.selected, 3 % k);
    for _ in 0..k {
        palette.handle_key_events(key(KeyCode::Down));
    }
    assert_eq!(palette.selected, 3 % k);
}

#[test]
fn test_up_wraps_the_other_way() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    let k = palette.filtered.len();
    palette.handle_key_events(key(KeyCode::Up));
    assert_eq!(palette.selected, k - 1);
    // N ups from the top land on (k - N mod k) mod k
    palette.open();
    for _ in 0..7 {
        palette.handle_key_events(key(KeyCode::Up));
    }
    assert_eq!(palette.selected, (k - 7 % k) % k);
}

#[test]
fn test_navigation_is_a_noop_on_empty_results() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    type_str(&mut palette, "zzz");
    assert!(palette.filtered.is_empty());
    palette.handle_key_events(key(KeyCode::Down));
    assert_eq!(palette.selected, 0);
    palette.handle_key_events(key(KeyCode::Up));
    assert_eq!(palette.selected, 0);
}

#[test]
fn test_enter_on_empty_results_does_nothing() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    type_str(&mut palette, "zzz");
    let action = palette.handle_key_events(key(KeyCode::Enter));
    assert!(matches!(action, Action::None));
}

#[test]
fn test_escape_cancels_without_executing() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    type_str(&mut palette, "dash");
    let action = palette.handle_key_events(key(KeyCode::Esc));
    assert!(matches!(action, Action::ClosePalette));
}

#[test]
fn test_backspace_refilters() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    type_str(&mut palette, "dashx");
    assert!(palette.filtered.is_empty());
    palette.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(palette.query, "dash");
    assert_eq!(palette.filtered.len(), 1);
}

#[test]
fn test_dash_query_selects_go_to_dashboard() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    type_str(&mut palette, "dash");
    assert_eq!(palette.filtered.len(), 1);
    let command = palette.selected_command().unwrap();
    assert_eq!(command.title, "Go to Dashboard");

    let action = palette.handle_key_events(key(KeyCode::Enter));
    let Action::ExecuteCommand(index) = action else {
        panic!("expected ExecuteCommand, got {:?}", action);
    };
    assert_eq!(commands::REGISTRY[index].action, CommandAction::Navigate(View::Dashboard));
}

#[test]
fn test_selection_survives_wrap_in_both_directions() {
    let mut palette = CommandPalette::new(Theme::Dark);
    palette.open();
    type_str(&mut palette, "go");
    let k = palette.filtered.len();
    palette.handle_key_events(key(KeyCode::Down));
    palette.handle_key_events(key(KeyCode::Up));
    assert_eq!(palette.selected, 0);
    palette.handle_key_events(key(KeyCode::Up));
    assert_eq!(palette.selected, k - 1);
    palette.handle_key_events(key(KeyCode::Down));
    assert_eq!(palette.selected, 0);
}
