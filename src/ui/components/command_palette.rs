//! Command palette component.
//!
//! A modal launcher over the static command registry: type to filter,
//! Up/Down to move through the flattened result list (wrapping at both
//! ends), Enter or a mouse click to execute, Esc to cancel. Results render
//! grouped under category headers in registry declaration order; the
//! selection index ignores the headers and addresses results only.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::commands::{self, Command};
use crate::constants::{EMPTY_COMMANDS, TITLE_COMMAND_PALETTE};
use crate::theme::Theme;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;

/// What one rendered row of the result list is.
enum Row {
    Header(&'static str),
    /// Position in the flattened filtered list.
    Item(usize),
}

pub struct CommandPalette {
    /// Current search text.
    pub query: String,
    /// Indices into the registry of the commands matching `query`.
    pub filtered: Vec<usize>,
    /// Selection over the flattened filtered list, 0-based.
    pub selected: usize,
    pub theme: Theme,
    list_state: ListState,
    /// Result-list rect from the last render, for mouse hit-testing.
    results_area: Rect,
}

impl CommandPalette {
    pub fn new(theme: Theme) -> Self {
        Self {
            query: String::new(),
            filtered: commands::matching_indices(""),
            selected: 0,
            theme,
            list_state: ListState::default(),
            results_area: Rect::default(),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Reset for a fresh open: empty query, full list, selection at the top.
    pub fn open(&mut self) {
        self.query.clear();
        self.refilter();
    }

    /// The registry command currently selected, if the result list is
    /// non-empty.
    pub fn selected_command(&self) -> Option<&'static Command> {
        self.filtered.get(self.selected).map(|&i| &commands::REGISTRY[i])
    }

    fn refilter(&mut self) {
        self.filtered = commands::matching_indices(&self.query);
        // Every query change restarts the selection at the top
        self.selected = 0;
    }

    /// Move the selection down, wrapping past the end. No-op on an empty
    /// result list.
    fn select_next(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + 1) % self.filtered.len();
        }
    }

    /// Move the selection up, wrapping past the start. No-op on an empty
    /// result list.
    fn select_prev(&mut self) {
        let n = self.filtered.len();
        if n > 0 {
            self.selected = (self.selected + n - 1) % n;
        }
    }

    /// Build the rendered rows: a header before the first result of each
    /// category, then its results, in declaration order.
    fn rows(&self) -> Vec<Row> {
        let mut rows = Vec::with_capacity(self.filtered.len() + 3);
        let mut current_header: Option<&'static str> = None;
        for (flat, &index) in self.filtered.iter().enumerate() {
            let header = commands::REGISTRY[index].category.label();
            if current_header != Some(header) {
                rows.push(Row::Header(header));
                current_header = Some(header);
            }
            rows.push(Row::Item(flat));
        }
        rows
    }

    /// Rendered row of the selected result, accounting for the headers
    /// above it.
    fn selected_rendered_row(&self, rows: &[Row]) -> Option<usize> {
        rows.iter().position(|row| matches!(row, Row::Item(flat) if *flat == self.selected))
    }

    /// Handle hover and clicks inside the palette. Hover moves the shared
    /// selection index; a click on a result executes it like Enter.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.results_area;
        let in_results = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;
        if !in_results {
            return Action::None;
        }

        let rows = self.rows();
        let row_index = self.list_state.offset() + (mouse.row - area.y) as usize;
        let Some(Row::Item(flat)) = rows.get(row_index) else {
            return Action::None;
        };
        let flat = *flat;

        match mouse.kind {
            MouseEventKind::Moved => {
                self.selected = flat;
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.selected = flat;
                self.execute()
            }
            _ => Action::None,
        }
    }

    /// Execute the selected command; a no-op when nothing matches.
    fn execute(&self) -> Action {
        match self.filtered.get(self.selected) {
            Some(&index) => Action::ExecuteCommand(index),
            None => Action::None,
        }
    }
}

impl Component for CommandPalette {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::ClosePalette,
            KeyCode::Enter => self.execute(),
            KeyCode::Down => {
                self.select_next();
                Action::None
            }
            KeyCode::Up => {
                self.select_prev();
                Action::None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.refilter();
                Action::None
            }
            KeyCode::Char(c) if !key.modifiers.contains(crossterm::event::KeyModifiers::CONTROL) => {
                self.query.push(c);
                self.refilter();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let area = LayoutManager::palette_rect(rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(TITLE_COMMAND_PALETTE)
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(self.theme.accent()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let input = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.accent())),
            Span::raw(self.query.clone()),
            Span::styled("█", Style::default().fg(self.theme.dim())),
        ]);
        f.render_widget(Paragraph::new(input), parts[0]);

        self.results_area = parts[1];

        let rows = self.rows();
        if rows.is_empty() {
            let empty = Line::from(Span::styled(
                EMPTY_COMMANDS,
                Style::default().fg(self.theme.dim()).add_modifier(Modifier::ITALIC),
            ));
            f.render_widget(Paragraph::new(empty), parts[1]);
            return;
        }

        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| match row {
                Row::Header(label) => ListItem::new(Line::from(Span::styled(
                    label.to_uppercase(),
                    Style::default().fg(self.theme.dim()).add_modifier(Modifier::BOLD),
                ))),
                Row::Item(flat) => {
                    let command = &commands::REGISTRY[self.filtered[*flat]];
                    let selected = *flat == self.selected;
                    let title_style = if selected {
                        Style::default().fg(self.theme.accent()).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    let mut spans = vec![
                        Span::raw(if selected { "▶ " } else { "  " }),
                        Span::raw(command.icon),
                        Span::raw(" "),
                        Span::styled(command.title, title_style),
                    ];
                    if let Some(shortcut) = command.shortcut {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(shortcut, Style::default().fg(self.theme.dim())));
                    }
                    ListItem::new(Line::from(spans))
                }
            })
            .collect();

        self.list_state.select(self.selected_rendered_row(&rows));
        let list = List::new(items);
        f.render_stateful_widget(list, parts[1], &mut self.list_state);
    }
}
