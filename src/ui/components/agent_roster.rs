//! Agent roster panel.
//!
//! Cards for each agent: name, role, status badge, the task they are on
//! (when any), and their completed-task count. The status badge mapping is
//! total; an unknown status renders with the idle style.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::constants::{EMPTY_AGENTS, SKELETON_ROWS_AGENTS, TITLE_AGENTS};
use crate::data::{Agent, AgentStatus};
use crate::icons::IconService;
use crate::theme::Theme;
use crate::ui::components::panel::{self, LoadPhase};
use crate::ui::core::actions::{Action, PanelKind};
use crate::ui::core::Component;

/// Badge color for an agent status. Total over the enum; unknown falls
/// back to the idle color.
pub fn status_color(status: AgentStatus) -> Color {
    match status {
        AgentStatus::Active => Color::Green,
        AgentStatus::Blocked => Color::Red,
        AgentStatus::Idle | AgentStatus::Unknown => Color::Yellow,
    }
}

pub struct AgentRoster {
    pub phase: LoadPhase<Agent>,
    pub theme: Theme,
    pub icons: IconService,
    list_state: ListState,
}

impl AgentRoster {
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

    pub fn set_result(&mut self, result: Result<Vec<Agent>, String>) {
        self.phase.resolve(result);
        self.list_state.select(None);
        *self.list_state.offset_mut() = 0;
    }

    fn status_icon(&self, status: AgentStatus) -> &'static str {
        match status {
            AgentStatus::Active => self.icons.agent_active(),
            AgentStatus::Blocked => self.icons.agent_blocked(),
            AgentStatus::Idle | AgentStatus::Unknown => self.icons.agent_idle(),
        }
    }

    fn card(&self, agent: &Agent) -> ListItem<'static> {
        let badge_color = status_color(agent.status);
        let mut lines = vec![Line::from(vec![
            Span::styled(self.status_icon(agent.status), Style::default().fg(badge_color)),
            Span::raw(" "),
            Span::styled(agent.name.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(agent.status.label(), Style::default().fg(badge_color)),
        ])];
        lines.push(Line::from(Span::styled(
            format!("  {}", agent.role),
            Style::default().fg(self.theme.dim()),
        )));
        if let Some(task) = &agent.current_task {
            lines.push(Line::from(vec![
                Span::styled("  on: ", Style::default().fg(self.theme.dim())),
                Span::styled(task.clone(), Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(Span::styled(
            format!("  {} tasks completed", agent.tasks_completed),
            Style::default().fg(self.theme.dim()),
        )));
        lines.push(Line::from(""));
        ListItem::new(lines)
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

impl Component for AgentRoster {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') => Action::ReloadPanel(PanelKind::Agents),
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
            .title(TITLE_AGENTS)
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(self.theme.border()));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        match &self.phase {
            LoadPhase::Loading => {
                panel::render_skeleton(f, inner, SKELETON_ROWS_AGENTS, self.theme, &self.icons);
            }
            LoadPhase::Failed(message) => {
                panel::render_error(f, inner, message, self.theme, &self.icons);
            }
            LoadPhase::Ready(records) if records.is_empty() => {
                panel::render_empty(f, inner, EMPTY_AGENTS, self.theme);
            }
            LoadPhase::Ready(records) => {
                let items: Vec<ListItem> = records.iter().map(|agent| self.card(agent)).collect();
                f.render_stateful_widget(List::new(items), inner, &mut self.list_state);
            }
        }
    }
}
