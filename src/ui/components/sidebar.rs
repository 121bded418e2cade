//! Navigation sidebar component.
//!
//! A fixed list of the five views. Selection follows the shell's current
//! view; Shift+J/K move through it (wrapping) and navigate immediately,
//! and a mouse click navigates to the clicked row.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::constants::TITLE_NAVIGATION;
use crate::theme::Theme;
use crate::ui::core::actions::{Action, View, ALL_VIEWS};
use crate::ui::core::Component;

pub struct Sidebar {
    pub current: View,
    pub theme: Theme,
    list_state: ListState,
    /// Rect from the last render, for mouse hit-testing.
    area: Rect,
}

impl Sidebar {
    pub fn new(current: View, theme: Theme) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(Self::view_index(current)));
        Self {
            current,
            theme,
            list_state,
            area: Rect::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Follow a navigation that happened elsewhere (palette, shortcut).
    pub fn set_current(&mut self, view: View) {
        self.current = view;
        self.list_state.select(Some(Self::view_index(view)));
    }

    fn view_index(view: View) -> usize {
        ALL_VIEWS.iter().position(|v| *v == view).unwrap_or(0)
    }

    /// Handle a click inside the sidebar; rows outside the list are ignored.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.area;
        let in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row > area.y
            && mouse.row < area.y + area.height.saturating_sub(1);
        if !in_area {
            return Action::None;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let clicked = self.list_state.offset() + (mouse.row - area.y - 1) as usize;
            if let Some(view) = ALL_VIEWS.get(clicked) {
                return Action::Navigate(*view);
            }
        }
        Action::None
    }
}

impl Component for Sidebar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                let next = (Self::view_index(self.current) + 1) % ALL_VIEWS.len();
                Action::Navigate(ALL_VIEWS[next])
            }
            KeyCode::Char('K') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                let n = ALL_VIEWS.len();
                let prev = (Self::view_index(self.current) + n - 1) % n;
                Action::Navigate(ALL_VIEWS[prev])
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        self.list_state.select(Some(Self::view_index(self.current)));

        let items: Vec<ListItem> = ALL_VIEWS
            .iter()
            .map(|view| {
                let selected = *view == self.current;
                let style = if selected {
                    Style::default().fg(self.theme.accent()).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let marker = if selected { "▸ " } else { "  " };
                ListItem::new(Line::from(vec![Span::raw(marker), Span::styled(view.label(), style)]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(TITLE_NAVIGATION)
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(self.theme.border())),
        );

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
