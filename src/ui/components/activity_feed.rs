//! Activity feed panel.
//!
//! A read-only list of activity entries in the order the data source
//! provides them (newest first by convention; the panel never resorts).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::constants::{EMPTY_ACTIVITY, SKELETON_ROWS_ACTIVITY, TITLE_ACTIVITY};
use crate::data::Activity;
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::components::panel::{self, LoadPhase};
use crate::ui::core::actions::{Action, PanelKind};
use crate::ui::core::Component;
use crate::utils::datetime;

pub struct ActivityFeed {
    pub phase: LoadPhase<Activity>,
    pub theme: Theme,
    pub icons: IconService,
    list_state: ListState,
}

impl ActivityFeed {
    pub fn new(theme: Theme, icons: IconService) -> Self {
        Self {
            phase: LoadPhase::Loading,
            theme,
            icons,
            list_state: ListState::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Resolve the outstanding load with a fetch result.
    pub fn set_result(&mut self, result: Result<Vec<Activity>, String>) {
        self.phase.resolve(result);
        self.list_state.select(None);
        *self.list_state.offset_mut() = 0;
    }

    fn scroll_down(&mut self) {
        if let Some(records) = self.phase.records() {
            let offset = self.list_state.offset();
            if offset + 1 < records.len() {
                *self.list_state.offset_mut() = offset + 1;
            }
        }
    }

    fn scroll_up(&mut self) {
        let offset = self.list_state.offset();
        *self.list_state.offset_mut() = offset.saturating_sub(1);
    }
}

impl Component for ActivityFeed {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') => Action::ReloadPanel(PanelKind::Activity),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(TITLE_ACTIVITY)
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(self.theme.border()));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        match &self.phase {
            LoadPhase::Loading => {
                panel::render_skeleton(f, inner, SKELETON_ROWS_ACTIVITY, self.theme, &self.icons);
            }
            LoadPhase::Failed(message) => {
                panel::render_error(f, inner, message, self.theme, &self.icons);
            }
            LoadPhase::Ready(records) if records.is_empty() => {
                panel::render_empty(f, inner, EMPTY_ACTIVITY, self.theme);
            }
            LoadPhase::Ready(records) => {
                let items: Vec<ListItem> = records
                    .iter()
                    .map(|entry| {
                        ListItem::new(Line::from(vec![
                            Span::styled(self.icons.activity(), Style::default().fg(self.theme.accent())),
                            Span::raw(" "),
                            Span::styled(entry.message.clone(), Style::default().fg(Color::White)),
                            Span::raw("  "),
                            Span::styled(
                                datetime::relative_from_ms(entry.timestamp),
                                Style::default().fg(self.theme.dim()),
                            ),
                        ]))
                    })
                    .collect();
                f.render_stateful_widget(List::new(items), inner, &mut self.list_state);
            }
        }
    }
}
